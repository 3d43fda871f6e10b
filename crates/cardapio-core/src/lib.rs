//! # cardapio-core: Pure Business Logic for the Digital Menu
//!
//! This crate is the heart of the menu engine: domain types and pure
//! rules with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cardapio Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  WebView Host (paints views)                │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              cardapio-client (stores + render)              │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ cardapio-core (THIS CRATE) ★                │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐   │   │
//! │  │   │  types   │  │  money   │  │  filter  │  │  error   │   │   │
//! │  │   │ Product  │  │  Money   │  │ category │  │  stock   │   │   │
//! │  │   │ Category │  │  format  │  │ + search │  │  rules   │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Product, Variation, Table)
//! - [`money`] - Money in integer centavos plus metical formatting
//! - [`filter`] - The category/search predicate used on both sides of the
//!   wire
//! - [`error`] - Typed domain errors

pub mod error;
pub mod filter;
pub mod money;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::{Category, Product, Table, TableStatus, Variation};
