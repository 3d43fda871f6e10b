//! # View Models
//!
//! The serializable shapes the render passes produce and the WebView
//! host paints. Every type here is plain data: building a view never
//! mutates a store, which is what makes re-rendering safe to call
//! redundantly.

use serde::Serialize;
use ts_rs::TS;

use crate::notify::NotificationKind;
use crate::order::SubmitControl;

// =============================================================================
// Page
// =============================================================================

/// The whole rendered page: four regions plus overlays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageView {
    pub categories: CategoryListView,
    pub products: ProductGridView,
    pub cart: CartPanelView,
    /// Present only while a variation picker is open.
    pub variation_modal: Option<VariationModalView>,
    pub toasts: Vec<ToastView>,
}

// =============================================================================
// Category List
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryListView {
    /// "Todos" first, then one button per category; exactly one active.
    pub buttons: Vec<CategoryButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryButton {
    /// `None` is the "all categories" button.
    pub category_id: Option<i64>,
    pub label: String,
    pub active: bool,
    pub classes: Vec<String>,
}

// =============================================================================
// Product Grid
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductGridView {
    pub cards: Vec<ProductCard>,
    /// "No results" text shown instead of an empty grid.
    pub placeholder: Option<String>,
}

/// What the card shows in its image slot.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum ProductImage {
    Photo { url: String, alt: String },
    Glyph { glyph: String },
}

/// What tapping the card's action control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CardAction {
    AddToCart,
    OpenVariations,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductCard {
    pub product_id: i64,
    pub image: ProductImage,
    pub name: String,
    pub description: String,
    /// Formatted price, `"A partir de …"`-prefixed for variation products.
    pub price_label: String,
    pub action: CardAction,
    pub action_label: String,
    /// `"N variações disponíveis"` on variation products.
    pub variations_note: Option<String>,
    pub classes: Vec<String>,
}

// =============================================================================
// Variation Picker
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VariationModalView {
    pub product_id: i64,
    pub title: String,
    pub prompt: String,
    pub options: Vec<VariationOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VariationOption {
    pub variation_id: i64,
    pub name: String,
    pub stock_label: String,
    pub price_label: String,
    pub classes: Vec<String>,
}

// =============================================================================
// Cart Panel
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartPanelView {
    pub open: bool,
    /// Counter badge: total quantity across all lines.
    pub count_badge: i64,
    pub lines: Vec<CartLineRow>,
    /// "Carrinho vazio" when there are no lines.
    pub empty_message: Option<String>,
    pub total_label: String,
    pub tables: Vec<TableOption>,
    pub table_placeholder: String,
    pub selected_table: Option<i64>,
    pub submit: SubmitControl,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineRow {
    pub product_id: i64,
    pub variation_id: Option<i64>,
    pub name: String,
    /// `"{price} cada"`.
    pub unit_price_label: String,
    pub quantity: i64,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TableOption {
    pub table_id: i64,
    pub label: String,
}

// =============================================================================
// Toasts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToastView {
    pub kind: NotificationKind,
    pub message: String,
}
