//! # Catalog Filter
//!
//! The product filter predicate shared by the request builder and the
//! local re-filter.
//!
//! ## Why One Predicate?
//! The backend applies the same filter server-side when the client sends
//! `categoria_id`/`busca` request parameters. Re-filtering locally with
//! THIS predicate must yield the same result set as a fresh fetch, so the
//! semantics live in exactly one place.

use crate::types::Product;

/// Returns true when a product passes the active category/search filter.
///
/// ## Rules
/// - No category selected (`None`) matches every product; otherwise the
///   product must belong to the selected category.
/// - An empty query matches every product; otherwise the query must be a
///   case-insensitive substring of the product name or description.
pub fn matches(product: &Product, category_id: Option<i64>, query: &str) -> bool {
    if let Some(category_id) = category_id {
        if product.category_id != Some(category_id) {
            return false;
        }
    }

    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    if product.name.to_lowercase().contains(&needle) {
        return true;
    }

    product
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Applies [`matches`] over a product list, preserving wire order.
pub fn filter_products<'a>(
    products: &'a [Product],
    category_id: Option<i64>,
    query: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, category_id, query))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, category_id: Option<i64>, name: &str, description: Option<&str>) -> Product {
        Product {
            id,
            category_id,
            name: name.to_string(),
            description: description.map(str::to_string),
            price: Money::from_cents(10_000),
            image_url: None,
            stock: 10,
            has_variations: false,
            variations: Vec::new(),
        }
    }

    #[test]
    fn test_no_filter_matches_everything() {
        let p = product(1, Some(2), "Frango Grelhado", None);
        assert!(matches(&p, None, ""));
        assert!(matches(&p, None, "   "));
    }

    #[test]
    fn test_category_filter() {
        let p = product(1, Some(2), "Frango Grelhado", None);
        assert!(matches(&p, Some(2), ""));
        assert!(!matches(&p, Some(3), ""));

        // A product without a category only matches the "all" selection
        let orphan = product(2, None, "Água Mineral", None);
        assert!(matches(&orphan, None, ""));
        assert!(!matches(&orphan, Some(2), ""));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let p = product(1, Some(2), "Frango Grelhado", Some("Com batata frita"));
        assert!(matches(&p, None, "frango"));
        assert!(matches(&p, None, "GRELHADO"));
        assert!(matches(&p, None, "batata"));
        assert!(!matches(&p, None, "pizza"));
    }

    #[test]
    fn test_both_conditions_must_hold() {
        let p = product(1, Some(2), "Frango Grelhado", None);
        assert!(matches(&p, Some(2), "frango"));
        assert!(!matches(&p, Some(3), "frango"));
        assert!(!matches(&p, Some(2), "pizza"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = vec![
            product(1, Some(1), "Pizza Margherita", None),
            product(2, Some(2), "Frango Grelhado", None),
            product(3, Some(1), "Pizza Calabresa", None),
        ];

        let filtered = filter_products(&products, Some(1), "pizza");
        let ids: Vec<i64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
