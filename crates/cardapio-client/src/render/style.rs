//! # Style Render Pass
//!
//! Decorates the structural views with the CSS class lists the host
//! page's stylesheet keys on. Classes are *assigned*, never appended, so
//! re-running the pass (or the whole pipeline) cannot accumulate
//! duplicates. The pass touches nothing but `classes` fields.

use super::views::PageView;
use super::{RenderContext, RenderPass};

pub const CATEGORY_BUTTON_CLASS: &str = "category-btn";
pub const CATEGORY_ACTIVE_CLASS: &str = "active";
pub const PRODUCT_CARD_CLASS: &str = "product-card";
pub const VARIATION_ITEM_CLASS: &str = "variation-item";
pub const CART_ITEM_CLASS: &str = "cart-item";

/// The styling decoration pass.
pub struct StylePass;

impl RenderPass for StylePass {
    fn name(&self) -> &'static str {
        "style"
    }

    fn apply(&self, _ctx: &RenderContext<'_>, page: &mut PageView) {
        for button in &mut page.categories.buttons {
            button.classes = if button.active {
                vec![
                    CATEGORY_BUTTON_CLASS.to_string(),
                    CATEGORY_ACTIVE_CLASS.to_string(),
                ]
            } else {
                vec![CATEGORY_BUTTON_CLASS.to_string()]
            };
        }

        for card in &mut page.products.cards {
            card.classes = vec![PRODUCT_CARD_CLASS.to_string()];
        }

        if let Some(modal) = &mut page.variation_modal {
            for option in &mut modal.options {
                option.classes = vec![VARIATION_ITEM_CLASS.to_string()];
            }
        }

        for line in &mut page.cart.lines {
            line.classes = vec![CART_ITEM_CLASS.to_string()];
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
