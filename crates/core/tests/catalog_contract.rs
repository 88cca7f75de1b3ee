use std::collections::HashSet;

use siza_core::store::grocery;
use siza_core::{select_audio_policy, AudioPolicyVariant, Catalog, ParticipantKind, QueryResult};

fn catalog() -> Catalog {
    grocery().expect("built-in grocery catalog must load")
}

#[test]
fn item_ids_are_globally_unique() {
    let catalog = catalog();
    let ids: Vec<&str> = catalog.items().map(|item| item.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();

    assert_eq!(ids.len(), unique.len());
    assert_eq!(ids.len(), catalog.item_count());
}

#[test]
fn category_names_are_unique() {
    let catalog = catalog();
    let names: HashSet<&str> =
        catalog.categories().iter().map(|category| category.name.as_str()).collect();

    assert_eq!(names.len(), catalog.category_count());
}

#[test]
fn produce_query_returns_whole_category_in_order() {
    let catalog = catalog();
    let produce = catalog.category("Produce").expect("produce shelf exists").clone();

    for query in ["produce", "PRODUCE", "Produce", "pRoDuCe"] {
        match catalog.search(query) {
            QueryResult::Matches(categories) => {
                assert_eq!(categories, vec![produce.clone()], "query {query:?}");
            }
            QueryResult::NotFound => panic!("query {query:?} should match the produce shelf"),
        }
    }
}

#[test]
fn tomato_query_returns_only_matching_items() {
    let result = catalog().search("tomato");

    let summary: Vec<(&str, Vec<&str>)> = result
        .categories()
        .iter()
        .map(|category| {
            (category.name.as_str(), category.items.iter().map(|item| item.name.as_str()).collect())
        })
        .collect();

    assert_eq!(summary, vec![("Produce", vec!["Tomatoes"]), ("Pantry", vec!["Canned Tomatoes"])]);
}

#[test]
fn unknown_query_is_not_found() {
    assert_eq!(catalog().search("xyznotfound"), QueryResult::NotFound);
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = catalog();
    let encoded = serde_json::to_string(&catalog).expect("catalog serializes");
    let decoded: Catalog = serde_json::from_str(&encoded).expect("catalog deserializes");

    assert_eq!(decoded.category_count(), catalog.category_count());
    for (left, right) in decoded.categories().iter().zip(catalog.categories()) {
        assert_eq!(left.name, right.name);
        assert_eq!(left.items.len(), right.items.len());
        assert_eq!(left.items, right.items);
    }
}

#[test]
fn serialized_field_names_are_stable() {
    let value = serde_json::to_value(catalog()).expect("catalog serializes");
    let first_item = &value["categories"][0]["items"][0];

    assert_eq!(value["categories"][0]["name"], "Produce");
    assert_eq!(first_item["id"], "prod-001");
    assert_eq!(first_item["name"], "Bananas");
    assert_eq!(first_item["price"], "0.59");
    assert_eq!(first_item["unit"], "lb");
}

#[test]
fn audio_policy_is_telephony_only_for_sip() {
    for (classification, expected) in [
        ("sip", AudioPolicyVariant::Telephony),
        ("PARTICIPANT_KIND_SIP", AudioPolicyVariant::Telephony),
        ("standard", AudioPolicyVariant::General),
        ("ingress", AudioPolicyVariant::General),
        ("egress", AudioPolicyVariant::General),
        ("agent", AudioPolicyVariant::General),
        ("something-new", AudioPolicyVariant::General),
    ] {
        let kind: ParticipantKind = classification.parse().unwrap_or_default();
        assert_eq!(select_audio_policy(kind), expected, "{classification}");
    }
}
