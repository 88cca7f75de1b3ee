use super::{CategoryRow, ItemRow};

const fn row(id: &'static str, name: &'static str, cents: i64, unit: &'static str) -> ItemRow {
    ItemRow { id, name, cents, unit }
}

pub(super) const GROCERY: &[CategoryRow] = &[
    CategoryRow {
        name: "Produce",
        items: &[
            row("prod-001", "Bananas", 59, "lb"),
            row("prod-002", "Gala Apples", 189, "lb"),
            row("prod-003", "Tomatoes", 249, "lb"),
            row("prod-004", "Baby Spinach", 399, "5 oz bag"),
            row("prod-005", "Yellow Onions", 129, "lb"),
            row("prod-006", "Avocados", 150, "each"),
            row("prod-007", "Carrots", 149, "2 lb bag"),
        ],
    },
    CategoryRow {
        name: "Dairy & Eggs",
        items: &[
            row("dair-001", "Whole Milk", 389, "gallon"),
            row("dair-002", "Large Eggs", 429, "dozen"),
            row("dair-003", "Salted Butter", 499, "1 lb"),
            row("dair-004", "Cheddar Cheese", 549, "8 oz block"),
            row("dair-005", "Greek Yogurt", 129, "5.3 oz cup"),
        ],
    },
    CategoryRow {
        name: "Bakery",
        items: &[
            row("bake-001", "Sourdough Bread", 549, "loaf"),
            row("bake-002", "Whole Wheat Bread", 379, "loaf"),
            row("bake-003", "Plain Bagels", 449, "6 pack"),
            row("bake-004", "Butter Croissants", 599, "4 pack"),
        ],
    },
    CategoryRow {
        name: "Meat & Seafood",
        items: &[
            row("meat-001", "Chicken Breast", 499, "lb"),
            row("meat-002", "Ground Beef", 599, "lb"),
            row("meat-003", "Atlantic Salmon Fillet", 1199, "lb"),
            row("meat-004", "Thick Cut Bacon", 749, "12 oz pack"),
        ],
    },
    CategoryRow {
        name: "Pantry",
        items: &[
            row("pant-001", "Spaghetti", 179, "1 lb box"),
            row("pant-002", "Canned Tomatoes", 219, "28 oz can"),
            row("pant-003", "Jasmine Rice", 699, "5 lb bag"),
            row("pant-004", "Extra Virgin Olive Oil", 999, "500 ml bottle"),
            row("pant-005", "Peanut Butter", 389, "16 oz jar"),
            row("pant-006", "Black Beans", 119, "15 oz can"),
        ],
    },
    CategoryRow {
        name: "Frozen",
        items: &[
            row("froz-001", "Frozen Peas", 199, "12 oz bag"),
            row("froz-002", "Vanilla Ice Cream", 549, "1.5 qt"),
            row("froz-003", "Margherita Pizza", 799, "each"),
        ],
    },
    CategoryRow {
        name: "Beverages",
        items: &[
            row("bev-001", "Orange Juice", 479, "52 oz bottle"),
            row("bev-002", "Sparkling Water", 599, "12 pack"),
            row("bev-003", "Ground Coffee", 899, "12 oz bag"),
            row("bev-004", "Green Tea", 349, "20 bags"),
        ],
    },
];
