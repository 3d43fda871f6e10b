//! # Cardapio Client Engine
//!
//! The stateful layer of the digital menu: stores, rendering, order
//! submission and the backend client.
//!
//! ## Module Organization
//! ```text
//! cardapio_client/
//! ├── lib.rs        ◄─── You are here (exports)
//! ├── app.rs        ◄─── Controller: one method per user interaction
//! ├── state/
//! │   ├── mod.rs    ◄─── Store exports + transient UI state
//! │   ├── cart.rs   ◄─── Cart lines, stock-bounded mutations, totals
//! │   └── catalog.rs◄─── Categories/products/tables + fetch generations
//! ├── render/
//! │   ├── mod.rs    ◄─── RenderPass trait + pipeline orchestrator
//! │   ├── views.rs  ◄─── Serializable view models
//! │   ├── base.rs   ◄─── Structural projection pass
//! │   └── style.rs  ◄─── CSS class decoration pass
//! ├── api.rs        ◄─── MenuApi trait, wire DTOs, reqwest client
//! ├── config.rs     ◄─── Environment detection + endpoints
//! ├── order.rs      ◄─── Submission state machine
//! ├── notify.rs     ◄─── Toast notifications
//! ├── search.rs     ◄─── Search debounce
//! └── error.rs      ◄─── Transport error type
//! ```
//!
//! ## Execution Model
//! One logical thread, cooperatively scheduled. Controller methods
//! mutate stores synchronously and completely before rendering; the only
//! suspension points are the network calls behind the [`api::MenuApi`]
//! trait. There is no locking anywhere — correctness rests on that
//! mutate-fully-then-render ordering.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod order;
pub mod render;
pub mod search;
pub mod state;

pub use api::{HttpMenuApi, MenuApi, OrderOutcome, OrderRequest, ProductQuery};
pub use app::App;
pub use config::{ApiConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use render::{PageView, RenderPass, Renderer};
pub use state::{Cart, CartLine, CartTotals, CatalogStore};
