//! # Cart State
//!
//! The in-memory shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  User Action               Controller Call        Cart Change       │
//! │  ───────────               ───────────────        ───────────       │
//! │                                                                     │
//! │  Click "Adicionar" ──────► add_item() ──────────► +1 or new line    │
//! │                                                                     │
//! │  Pick a variation ───────► add_variation() ─────► +1 or new line    │
//! │                                                                     │
//! │  Stepper − / + ──────────► update_quantity() ───► qty ± 1,          │
//! │                                                    removed at 0     │
//! │                                                                     │
//! │  Order accepted ─────────► clear() ─────────────► empty             │
//! │                                                                     │
//! │  Every mutation completes fully before any render runs.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per distinct `(product_id, variation_id)` key;
//!   a missing variation id is its own key.
//! - Quantities are always ≥ 1; a decrement to 0 removes the line.
//! - No mutation commits a quantity above the referenced stock *at the
//!   time of that mutation*. Stock is re-resolved by the caller on every
//!   update, never cached on the line.
//! - Rejections are all-or-nothing: an over-stock request leaves the
//!   quantity untouched rather than clamping to the maximum.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use cardapio_core::{CoreError, CoreResult, Money, Product, Variation};

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product, optionally a specific variation,
/// and a quantity.
///
/// `name` and `unit_price` are snapshots taken when the line is created,
/// so the cart keeps displaying what the user added even if the catalog
/// refetches underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: i64,

    /// Present when the line is for a specific variation.
    pub variation_id: Option<i64>,

    /// Display name; for variations `"{product} - {variation}"`.
    pub name: String,

    /// Unit price frozen at add time.
    pub unit_price: Money,

    /// Always ≥ 1.
    pub quantity: i64,
}

impl CartLine {
    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    fn matches(&self, product_id: i64, variation_id: Option<i64>) -> bool {
        self.product_id == product_id && self.variation_id == variation_id
    }
}

/// Result of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// Quantity committed at the new value.
    Updated(i64),
    /// The new quantity dropped to zero or below; the line was removed.
    Removed,
    /// No line with that key exists; nothing happened.
    Missing,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregates recomputed freshly on every call — they back the counter
/// badge and the running total after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub count: i64,
    /// Sum of price × quantity over all lines.
    pub total: Money,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an insertion-ordered list of lines.
///
/// Page-lifetime state only: empty at load, cleared on a successful
/// order, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Lines in insertion order (= display order).
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of a product without a variation.
    ///
    /// ## Behavior
    /// - Line already present: increment by 1, bounded by `product.stock`.
    /// - Otherwise: append a new line with quantity 1 — which requires at
    ///   least one unit in stock.
    pub fn add_item(&mut self, product: &Product) -> CoreResult<()> {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product.id, None))
        {
            let requested = line.quantity + 1;
            if requested > product.stock {
                return Err(CoreError::StockExceeded {
                    name: product.name.clone(),
                    available: product.stock,
                    requested,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        if product.stock < 1 {
            return Err(CoreError::StockExceeded {
                name: product.name.clone(),
                available: product.stock,
                requested: 1,
            });
        }

        self.lines.push(CartLine {
            product_id: product.id,
            variation_id: None,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        });
        Ok(())
    }

    /// Adds one unit of a specific variation.
    ///
    /// A variation with no stock at all is rejected as unavailable; an
    /// existing line is incremented bounded by the *variation* stock.
    pub fn add_variation(&mut self, product: &Product, variation: &Variation) -> CoreResult<()> {
        let name = format!("{} - {}", product.name, variation.name);

        if !variation.is_available() {
            return Err(CoreError::VariationUnavailable { name });
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product.id, Some(variation.id)))
        {
            let requested = line.quantity + 1;
            if requested > variation.stock {
                return Err(CoreError::StockExceeded {
                    name,
                    available: variation.stock,
                    requested,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id,
            variation_id: Some(variation.id),
            name,
            unit_price: variation.price,
            quantity: 1,
        });
        Ok(())
    }

    /// Applies a signed quantity delta to the line with the given key.
    ///
    /// ## Behavior
    /// - No such line: [`LineChange::Missing`], nothing happens.
    /// - New quantity ≤ 0: the line is removed.
    /// - Otherwise the new quantity is validated against `available`
    ///   (the stock the caller re-resolved from the catalog); exceeding
    ///   it rejects the whole change.
    pub fn update_quantity(
        &mut self,
        product_id: i64,
        variation_id: Option<i64>,
        delta: i64,
        available: i64,
    ) -> CoreResult<LineChange> {
        let Some(index) = self
            .lines
            .iter()
            .position(|l| l.matches(product_id, variation_id))
        else {
            return Ok(LineChange::Missing);
        };

        let requested = self.lines[index].quantity + delta;
        if requested <= 0 {
            self.lines.remove(index);
            return Ok(LineChange::Removed);
        }

        if requested > available {
            return Err(CoreError::StockExceeded {
                name: self.lines[index].name.clone(),
                available,
                requested,
            });
        }

        self.lines[index].quantity = requested;
        Ok(LineChange::Updated(requested))
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recomputes count and total from scratch.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            count: self.lines.iter().map(|l| l.quantity).sum(),
            total: self.lines.iter().map(CartLine::line_total).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
