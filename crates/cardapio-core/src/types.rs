//! # Domain Types
//!
//! Core domain types for the digital menu.
//!
//! ## Ownership
//! A [`Product`] exclusively owns its [`Variation`]s; a variation never
//! outlives or migrates between products. Categories, products and tables
//! are replaced wholesale on every refetch, never mutated in place.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A menu category. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Variation
// =============================================================================

/// A selectable sub-option of a product (e.g. a size) with its own price
/// and stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variation {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub stock: i64,
}

impl Variation {
    /// Whether the variation can currently be ordered at all.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product on the menu.
///
/// `price` is the base price; for variation products it is the
/// "starting from" price and the effective price comes from the chosen
/// [`Variation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: i64,

    /// Category this product belongs to. Absent on legacy rows.
    pub category_id: Option<i64>,

    pub name: String,

    /// Optional description; the render layer substitutes fallback text
    /// when absent.
    pub description: Option<String>,

    pub price: Money,

    /// Image URL; absent (or the backend placeholder path) means the
    /// render layer shows a glyph instead.
    pub image_url: Option<String>,

    /// Current stock level for direct (non-variation) sales.
    pub stock: i64,

    pub has_variations: bool,

    /// Ordered as the backend returns them; display order is wire order.
    pub variations: Vec<Variation>,
}

impl Product {
    /// Looks up one of this product's variations by id.
    pub fn variation(&self, variation_id: i64) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == variation_id)
    }
}

// =============================================================================
// Table
// =============================================================================

/// Occupancy status of a table, as reported by the backend.
///
/// The wire values are Portuguese (`"livre"`, `"ocupada"`); anything else
/// is carried through verbatim so the roster can still display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(from = "String", into = "String")]
pub enum TableStatus {
    Free,
    Occupied,
    Other(String),
}

impl From<String> for TableStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "livre" => TableStatus::Free,
            "ocupada" => TableStatus::Occupied,
            _ => TableStatus::Other(raw),
        }
    }
}

impl From<TableStatus> for String {
    fn from(status: TableStatus) -> Self {
        match status {
            TableStatus::Free => "livre".to_string(),
            TableStatus::Occupied => "ocupada".to_string(),
            TableStatus::Other(raw) => raw,
        }
    }
}

impl TableStatus {
    /// Display label shown in the table selector.
    pub fn label(&self) -> String {
        match self {
            TableStatus::Free => "🟢 Livre".to_string(),
            TableStatus::Occupied => "🔴 Ocupada".to_string(),
            TableStatus::Other(raw) => raw.clone(),
        }
    }
}

/// A restaurant table ("mesa") an order can be submitted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Table {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    pub status: TableStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_variations() -> Product {
        Product {
            id: 7,
            category_id: Some(2),
            name: "Pizza".to_string(),
            description: None,
            price: Money::from_cents(45_000),
            image_url: None,
            stock: 0,
            has_variations: true,
            variations: vec![
                Variation {
                    id: 1,
                    name: "Média".to_string(),
                    price: Money::from_cents(45_000),
                    stock: 5,
                },
                Variation {
                    id: 2,
                    name: "Grande".to_string(),
                    price: Money::from_cents(60_000),
                    stock: 0,
                },
            ],
        }
    }

    #[test]
    fn test_variation_lookup() {
        let product = product_with_variations();
        assert_eq!(product.variation(2).unwrap().name, "Grande");
        assert!(product.variation(99).is_none());
    }

    #[test]
    fn test_variation_availability() {
        let product = product_with_variations();
        assert!(product.variation(1).unwrap().is_available());
        assert!(!product.variation(2).unwrap().is_available());
    }

    #[test]
    fn test_table_status_from_wire() {
        assert_eq!(TableStatus::from("livre".to_string()), TableStatus::Free);
        assert_eq!(
            TableStatus::from("ocupada".to_string()),
            TableStatus::Occupied
        );
        assert_eq!(
            TableStatus::from("reservada".to_string()),
            TableStatus::Other("reservada".to_string())
        );
    }

    #[test]
    fn test_table_status_labels() {
        assert_eq!(TableStatus::Free.label(), "🟢 Livre");
        assert_eq!(TableStatus::Occupied.label(), "🔴 Ocupada");
        assert_eq!(
            TableStatus::Other("reservada".to_string()).label(),
            "reservada"
        );
    }

    #[test]
    fn test_table_deserializes_wire_status() {
        let json = r#"{"id":3,"name":"Mesa 3","capacity":4,"status":"ocupada"}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.status, TableStatus::Occupied);
    }
}
