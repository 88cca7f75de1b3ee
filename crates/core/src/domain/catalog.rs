use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::{Category, Item, ItemId};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate item id `{id}` (in categories `{first}` and `{second}`)")]
    DuplicateItemId { id: ItemId, first: String, second: String },
    #[error("duplicate category name `{name}`")]
    DuplicateCategoryName { name: String },
    #[error("category at position {position} has a blank name")]
    BlankCategoryName { position: usize },
    #[error("item at position {position} in category `{category}` has a blank {field}")]
    BlankItemField { category: String, position: usize, field: &'static str },
    #[error("item `{id}` has a negative price {price}")]
    NegativePrice { id: ItemId, price: Decimal },
}

/// The full product catalog.
///
/// A `Catalog` can only be obtained through [`Catalog::new`] (or by deserializing,
/// which goes through the same checks), so holding one means every item id is
/// unique across the catalog and every category name is unique. There are no
/// mutating methods; share it behind an `Arc` for the life of the process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(document.categories)
    }
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks a category up by name, ignoring case.
    pub fn category(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim().to_lowercase();
        self.categories.iter().find(|category| category.name.to_lowercase() == wanted)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items().find(|item| &item.id == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }
}

fn validate(categories: &[Category]) -> Result<(), CatalogError> {
    let mut category_names = HashSet::new();
    let mut item_owners: HashMap<&ItemId, &str> = HashMap::new();

    for (position, category) in categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(CatalogError::BlankCategoryName { position });
        }
        // Names are matched case-insensitively by search, so uniqueness is too.
        if !category_names.insert(category.name.to_lowercase()) {
            return Err(CatalogError::DuplicateCategoryName { name: category.name.clone() });
        }

        for (position, item) in category.items.iter().enumerate() {
            let fields = [
                ("id", item.id.as_str()),
                ("name", item.name.as_str()),
                ("unit", item.unit.as_str()),
            ];
            let blank_field = fields
                .into_iter()
                .find(|(_, value)| value.trim().is_empty())
                .map(|(field, _)| field);
            if let Some(field) = blank_field {
                return Err(CatalogError::BlankItemField {
                    category: category.name.clone(),
                    position,
                    field,
                });
            }

            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice { id: item.id.clone(), price: item.price });
            }

            if let Some(first) = item_owners.insert(&item.id, &category.name) {
                return Err(CatalogError::DuplicateItemId {
                    id: item.id.clone(),
                    first: first.to_string(),
                    second: category.name.clone(),
                });
            }
        }
    }

    Ok(())
}
