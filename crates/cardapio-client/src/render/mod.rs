//! # Render Synchronizer
//!
//! Projects store state onto view models through an ordered pipeline of
//! render passes.
//!
//! ## Why a Pipeline?
//! Extra styling used to be bolted on by reassigning render functions at
//! runtime. Here the decoration is explicit: the orchestrator runs a
//! fixed, ordered list of passes — the base pass builds the structural
//! views, the style pass decorates them with the CSS class lists the
//! host page expects. Each render starts from a fresh [`PageView`], so
//! calling it twice with unchanged stores produces an identical result
//! and repainting is always safe.

mod base;
mod style;
mod views;

pub use base::BasePass;
pub use style::StylePass;
pub use views::{
    CardAction, CartLineRow, CartPanelView, CategoryButton, CategoryListView, PageView,
    ProductCard, ProductGridView, ProductImage, TableOption, ToastView, VariationModalView,
    VariationOption,
};

use tracing::trace;

use crate::notify::Notifier;
use crate::order::OrderFlow;
use crate::state::{Cart, CatalogStore, UiState};

/// Read-only borrow of everything a render pass may project.
pub struct RenderContext<'a> {
    pub catalog: &'a CatalogStore,
    pub cart: &'a Cart,
    pub notifier: &'a Notifier,
    pub ui: &'a UiState,
    pub order: &'a OrderFlow,
}

/// One step of the render pipeline.
///
/// Passes only write into the [`PageView`]; they never touch a store,
/// which is what keeps redundant re-renders free of side effects.
pub trait RenderPass {
    fn name(&self) -> &'static str;

    fn apply(&self, ctx: &RenderContext<'_>, page: &mut PageView);
}

/// The render orchestrator: an ordered list of passes.
pub struct Renderer {
    passes: Vec<Box<dyn RenderPass>>,
}

impl Renderer {
    /// The standard pipeline: base projection, then styling.
    pub fn new() -> Self {
        Renderer {
            passes: vec![Box::new(BasePass), Box::new(StylePass)],
        }
    }

    /// Structural projection only — used by tests that assert on
    /// structure without class noise.
    pub fn bare() -> Self {
        Renderer {
            passes: vec![Box::new(BasePass)],
        }
    }

    /// Appends a custom pass to the end of the pipeline.
    pub fn push_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.push(pass);
    }

    /// Runs every pass in order over a fresh page.
    pub fn render(&self, ctx: &RenderContext<'_>) -> PageView {
        let mut page = PageView::default();
        for pass in &self.passes {
            trace!(pass = pass.name(), "render pass");
            pass.apply(ctx, &mut page);
        }
        page
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}
