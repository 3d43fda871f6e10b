//! # Application Controller
//!
//! One method per user interaction.
//!
//! ## Interaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Host event          Controller method        Effect                │
//! │  ──────────          ─────────────────        ──────                │
//! │  page load ────────► bootstrap() ───────────► fetch, then render    │
//! │  category tap ─────► select_category() ─────► select + refetch      │
//! │  search keystroke ─► search_input() ────────► debounce schedule     │
//! │  (quiet period) ───► settle_search() ───────► debounced refetch     │
//! │  card action ──────► product_click() ───────► add or open modal     │
//! │  variation tap ────► add_variation() ───────► add + close modal     │
//! │  stepper − / + ────► update_quantity() ─────► qty change            │
//! │  cart button ──────► open_cart() ───────────► tables fetch + open   │
//! │  submit ───────────► submit_order() ────────► order flow            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method mutates its stores *fully*, then renders: a returned
//! [`PageView`] never observes a half-applied mutation. Failures recover
//! in place — a rejected mutation or failed fetch leaves prior state
//! intact and surfaces at most a toast.

use std::time::Instant;

use tracing::{debug, info, warn};

use cardapio_core::CoreError;

use crate::api::{MenuApi, OrderOutcome, OrderRequest, ProductQuery};
use crate::notify::Notifier;
use crate::order::OrderFlow;
use crate::render::{PageView, RenderContext, Renderer};
use crate::search::SearchDebounce;
use crate::state::{Cart, CatalogStore, UiState};

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Raised whenever a quantity change would exceed available stock.
pub const MSG_STOCK_LIMIT: &str = "Quantidade máxima disponível atingida!";

/// Raised when a picked variation has no stock at all.
pub const MSG_VARIATION_UNAVAILABLE: &str = "Esta opção não está disponível!";

/// Raised when opening the cart panel with nothing in it.
pub const MSG_OPEN_EMPTY_CART: &str = "Adicione produtos ao carrinho primeiro!";

/// Generic retry message for failed order submissions.
pub const MSG_SUBMIT_FAILED: &str = "Erro ao fazer pedido. Tente novamente.";

/// Generic retry message for failed catalog/table fetches.
pub const MSG_FETCH_FAILED: &str = "Erro ao carregar dados. Tente novamente.";

// =============================================================================
// App
// =============================================================================

/// The menu engine: owns every store, the renderer and the backend
/// handle. Single logical thread — methods take `&mut self` and suspend
/// only at network boundaries.
pub struct App<A: MenuApi> {
    api: A,
    catalog: CatalogStore,
    cart: Cart,
    ui: UiState,
    order: OrderFlow,
    notifier: Notifier,
    renderer: Renderer,
    debounce: SearchDebounce,
}

impl<A: MenuApi> App<A> {
    pub fn new(api: A) -> Self {
        App {
            api,
            catalog: CatalogStore::new(),
            cart: Cart::new(),
            ui: UiState::default(),
            order: OrderFlow::new(),
            notifier: Notifier::new(),
            renderer: Renderer::new(),
            debounce: SearchDebounce::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read Access
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The render pipeline, for hosts that append custom passes.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Projects the current store state into a fresh page.
    pub fn render(&self) -> PageView {
        self.renderer.render(&RenderContext {
            catalog: &self.catalog,
            cart: &self.cart,
            notifier: &self.notifier,
            ui: &self.ui,
            order: &self.order,
        })
    }

    // -------------------------------------------------------------------------
    // Startup & Catalog Loading
    // -------------------------------------------------------------------------

    /// Initial load: categories and products are fetched before the
    /// first render, so the render layer never has to poll for
    /// readiness.
    pub async fn bootstrap(&mut self) -> PageView {
        info!("bootstrapping menu");
        self.load_categories().await;
        self.load_products().await;
        self.render()
    }

    async fn load_categories(&mut self) {
        match self.api.categories().await {
            Ok(categories) => self.catalog.set_categories(categories),
            Err(err) => {
                warn!(%err, "category fetch failed");
                self.notifier.error(MSG_FETCH_FAILED);
            }
        }
    }

    async fn load_products(&mut self) {
        let generation = self.catalog.begin_products_fetch();
        let query = ProductQuery {
            category_id: self.catalog.selected_category(),
            search: self.catalog.search().to_string(),
        };

        match self.api.products(&query).await {
            Ok(products) => {
                self.catalog.apply_products(generation, products);
            }
            Err(err) => {
                warn!(%err, "product fetch failed");
                self.notifier.error(MSG_FETCH_FAILED);
            }
        }
    }

    async fn load_tables(&mut self) {
        match self.api.tables().await {
            Ok(tables) => self.catalog.set_tables(tables),
            Err(err) => {
                warn!(%err, "table fetch failed");
                self.notifier.error(MSG_FETCH_FAILED);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Catalog Interactions
    // -------------------------------------------------------------------------

    /// Selects a category (`None` = all) and refetches the products.
    pub async fn select_category(&mut self, category_id: Option<i64>) -> PageView {
        self.catalog.select_category(category_id);
        // An explicit refetch supersedes any pending debounced one
        self.debounce.cancel();
        self.load_products().await;
        self.render()
    }

    /// Records a search keystroke at an explicit instant and schedules
    /// the debounced refetch. The query takes effect locally right away;
    /// only the network fetch waits for the quiet period.
    pub fn search_input_at(&mut self, query: &str, now: Instant) -> PageView {
        self.catalog.set_search(query);
        self.debounce.keystroke(now);
        self.render()
    }

    /// [`Self::search_input_at`] against the wall clock.
    pub fn search_input(&mut self, query: &str) -> PageView {
        self.search_input_at(query, Instant::now())
    }

    /// Issues the debounced fetch if its deadline has passed.
    pub async fn poll_search(&mut self, now: Instant) -> Option<PageView> {
        if !self.debounce.fire(now) {
            return None;
        }
        debug!(query = self.catalog.search(), "debounced search fetch");
        self.load_products().await;
        Some(self.render())
    }

    /// Sleeps until the pending debounce deadline and issues the fetch.
    /// Returns `None` when nothing was pending.
    pub async fn settle_search(&mut self) -> Option<PageView> {
        let deadline = self.debounce.deadline()?;
        tokio::time::sleep_until(deadline.into()).await;
        self.poll_search(Instant::now()).await
    }

    // -------------------------------------------------------------------------
    // Cart Interactions
    // -------------------------------------------------------------------------

    /// Card action: variation products open the picker, everything else
    /// goes straight into the cart. A product flagged as having
    /// variations but carrying none falls back to a direct add.
    pub fn product_click(&mut self, product_id: i64) -> PageView {
        let has_pickable_variations = self
            .catalog
            .product(product_id)
            .is_some_and(|p| p.has_variations && !p.variations.is_empty());

        if has_pickable_variations {
            self.ui.variation_modal = Some(product_id);
            self.render()
        } else {
            self.add_to_cart(product_id)
        }
    }

    /// Adds one unit of a product. Unknown ids are stale references and
    /// are ignored silently.
    pub fn add_to_cart(&mut self, product_id: i64) -> PageView {
        debug!(product_id, "add_to_cart");

        let Some(product) = self.catalog.product(product_id).cloned() else {
            debug!(product_id, "unknown product, ignoring");
            return self.render();
        };

        if let Err(err) = self.cart.add_item(&product) {
            self.notify_cart_error(err);
        }
        self.render()
    }

    /// Adds one unit of a variation; on success the picker closes and a
    /// success toast names what was added.
    pub fn add_variation(&mut self, product_id: i64, variation_id: i64) -> PageView {
        debug!(product_id, variation_id, "add_variation");

        let Some(product) = self.catalog.product(product_id).cloned() else {
            debug!(product_id, "unknown product, ignoring");
            return self.render();
        };
        let Some(variation) = product.variation(variation_id).cloned() else {
            debug!(variation_id, "unknown variation, ignoring");
            return self.render();
        };

        match self.cart.add_variation(&product, &variation) {
            Ok(()) => {
                self.ui.variation_modal = None;
                self.notifier.success(format!(
                    "{} - {} adicionado ao carrinho!",
                    product.name, variation.name
                ));
            }
            Err(err) => self.notify_cart_error(err),
        }
        self.render()
    }

    /// Applies a stepper delta to a cart line, revalidating against the
    /// stock currently in the catalog (not anything cached on the line).
    pub fn update_quantity(
        &mut self,
        product_id: i64,
        delta: i64,
        variation_id: Option<i64>,
    ) -> PageView {
        debug!(product_id, delta, ?variation_id, "update_quantity");

        let Some(available) = self.catalog.available_stock(product_id, variation_id) else {
            debug!(product_id, ?variation_id, "stale cart reference, ignoring");
            return self.render();
        };

        if let Err(err) = self
            .cart
            .update_quantity(product_id, variation_id, delta, available)
        {
            self.notify_cart_error(err);
        }
        self.render()
    }

    /// Dismisses the variation picker without mutating the cart.
    pub fn close_variation_modal(&mut self) -> PageView {
        self.ui.variation_modal = None;
        self.render()
    }

    fn notify_cart_error(&mut self, err: CoreError) {
        warn!(%err, "cart mutation rejected");
        let message = match err {
            CoreError::StockExceeded { .. } => MSG_STOCK_LIMIT,
            CoreError::VariationUnavailable { .. } => MSG_VARIATION_UNAVAILABLE,
        };
        self.notifier.error(message);
    }

    // -------------------------------------------------------------------------
    // Cart Panel & Order Submission
    // -------------------------------------------------------------------------

    /// Opens the cart panel, refusing on an empty cart, and loads the
    /// table roster for the selector.
    pub async fn open_cart(&mut self) -> PageView {
        if self.cart.is_empty() {
            self.notifier.error(MSG_OPEN_EMPTY_CART);
            return self.render();
        }

        self.load_tables().await;
        self.ui.cart_open = true;
        self.render()
    }

    pub fn close_cart(&mut self) -> PageView {
        self.ui.cart_open = false;
        self.render()
    }

    pub fn select_table(&mut self, table_id: Option<i64>) -> PageView {
        self.ui.selected_table = table_id;
        self.render()
    }

    /// Runs the submission state machine end to end.
    ///
    /// Validation failures never reach the network; a successful order
    /// clears the cart, closes the panel and refetches the products so
    /// the grid reflects decremented stock. Any failure leaves the cart
    /// untouched for a retry.
    pub async fn submit_order(&mut self) -> PageView {
        if !self.order.begin() {
            return self.render();
        }

        let table_id = match OrderFlow::validate(self.ui.selected_table, self.cart.is_empty()) {
            Ok(table_id) => table_id,
            Err(failure) => {
                self.order.invalid();
                self.notifier.error(failure.message());
                self.order.finish();
                return self.render();
            }
        };

        self.order.submitting();
        let request = OrderRequest::from_cart(table_id, &self.cart);

        match self.api.submit_order(&request).await {
            Ok(OrderOutcome::Accepted { order_id, total }) => {
                info!(order_id, "order accepted");
                self.order.succeeded();
                self.notifier.success(format!(
                    "Pedido #{order_id} criado com sucesso! Total: {total}"
                ));
                self.cart.clear();
                self.ui.cart_open = false;
                self.load_products().await;
            }
            Ok(OrderOutcome::Rejected { message }) => {
                warn!(%message, "order rejected by backend");
                self.order.failed();
                self.notifier.error(message);
            }
            Err(err) => {
                warn!(%err, "order submission failed");
                self.order.failed();
                self.notifier.error(MSG_SUBMIT_FAILED);
            }
        }

        self.order.finish();
        self.render()
    }

    // -------------------------------------------------------------------------
    // Housekeeping
    // -------------------------------------------------------------------------

    /// Host tick: expires old toasts.
    pub fn tick(&mut self, now: Instant) -> PageView {
        self.notifier.sweep(now);
        self.render()
    }

    /// Manual toast dismissal.
    pub fn dismiss_toast(&mut self, index: usize) -> PageView {
        self.notifier.dismiss(index);
        self.render()
    }
}
