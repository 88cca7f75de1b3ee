//! Siza core: the grocery catalog, catalog search, and the per-participant
//! audio policy used when a voice session starts.
//!
//! Nothing in this crate performs I/O after the catalog is built, and nothing
//! mutates the catalog afterwards, so every operation here is safe to call
//! concurrently from any number of sessions.

pub mod audio;
pub mod config;
pub mod domain;
pub mod errors;
pub mod search;
pub mod store;

pub use audio::{select_audio_policy, AudioPolicyVariant, ParticipantKind};
pub use domain::catalog::{Catalog, CatalogError};
pub use domain::product::{Category, Item, ItemId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use search::{search, QueryResult};
