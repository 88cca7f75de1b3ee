//! Built-in catalog definitions.
//!
//! Catalog data lives in static tables and is turned into a validated
//! [`Catalog`] once, at process start. Building either succeeds completely or
//! returns the first invariant violation; there is no partial catalog.

mod grocery;

use rust_decimal::Decimal;

use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::product::{Category, Item};

/// One shelf of a static catalog table.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRow {
    pub name: &'static str,
    pub items: &'static [ItemRow],
}

/// One product of a static catalog table. Prices are stored in cents.
#[derive(Clone, Copy, Debug)]
pub struct ItemRow {
    pub id: &'static str,
    pub name: &'static str,
    pub cents: i64,
    pub unit: &'static str,
}

impl ItemRow {
    fn to_item(self) -> Item {
        Item::new(self.id, self.name, Decimal::new(self.cents, 2), self.unit)
    }
}

pub fn from_rows(rows: &[CategoryRow]) -> Result<Catalog, CatalogError> {
    let categories = rows
        .iter()
        .map(|row| Category::new(row.name, row.items.iter().map(|item| item.to_item()).collect()))
        .collect();
    Catalog::new(categories)
}

/// The grocery catalog the assistant shops from.
pub fn grocery() -> Result<Catalog, CatalogError> {
    from_rows(grocery::GROCERY)
}
