//! Agent layer - the tool surface and session wiring for the voice shopper
//!
//! The real-time platform handles speech, the model and the room. This crate
//! supplies what the platform needs from us:
//! - the tool registry the model calls to ground its answers (`tools`, `shopping`)
//! - the persona instruction for the session (`persona`)
//! - the room-join entrypoint that starts the session with per-participant
//!   audio options and then joins the room (`session`)
//!
//! # Grounding Principle
//!
//! The model never states a price or product on its own. Everything it says
//! about the catalog comes from a tool result.

pub mod persona;
pub mod session;
pub mod shopping;
pub mod tools;

pub use session::{RoomJob, SessionOptions, ShoppingAgent};
pub use shopping::shopping_tools;
pub use tools::{Tool, ToolCall, ToolDefinition, ToolRegistry};
