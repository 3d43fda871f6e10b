//! # Catalog State
//!
//! The last-fetched categories, products and tables, plus the active
//! category/search selection.
//!
//! ## Replacement, Not Mutation
//! Every successful fetch replaces its collection wholesale; the engine
//! never edits a fetched product in place. The one subtlety is *which*
//! fetch gets to replace the products: rapid search input can put two
//! requests in flight, so every fetch takes a generation token and only
//! the latest-issued one is applied. Stale responses are discarded.

use tracing::debug;

use cardapio_core::{filter, Category, Product, Table};

/// Holds the catalog plus the filter selection that drives both the
/// request parameters and the local re-filter.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
    tables: Vec<Table>,
    selected_category: Option<i64>,
    search: String,
    /// Generation of the most recently issued product fetch.
    products_generation: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        CatalogStore::default()
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// Replaces the category set.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        debug!(count = categories.len(), "categories replaced");
        self.categories = categories;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    /// Registers a new product fetch and returns its generation token.
    ///
    /// Issuing a new fetch invalidates every earlier in-flight one.
    pub fn begin_products_fetch(&mut self) -> u64 {
        self.products_generation += 1;
        self.products_generation
    }

    /// Replaces the product set if `generation` is still the latest.
    ///
    /// Returns whether the response was applied.
    pub fn apply_products(&mut self, generation: u64, products: Vec<Product>) -> bool {
        if generation != self.products_generation {
            debug!(
                generation,
                latest = self.products_generation,
                "stale product response discarded"
            );
            return false;
        }
        debug!(count = products.len(), "products replaced");
        self.products = products;
        true
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Resolves the currently available stock behind a cart key: the
    /// product stock, or the variation stock when a variation id is
    /// given. `None` when the reference is stale (unknown ids).
    pub fn available_stock(&self, product_id: i64, variation_id: Option<i64>) -> Option<i64> {
        let product = self.product(product_id)?;
        match variation_id {
            Some(variation_id) => Some(product.variation(variation_id)?.stock),
            None => Some(product.stock),
        }
    }

    // -------------------------------------------------------------------------
    // Tables
    // -------------------------------------------------------------------------

    /// Replaces the table roster.
    pub fn set_tables(&mut self, tables: Vec<Table>) {
        debug!(count = tables.len(), "tables replaced");
        self.tables = tables;
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Sets the active category (`None` = all).
    pub fn select_category(&mut self, category_id: Option<i64>) {
        debug!(?category_id, "category selected");
        self.selected_category = category_id;
    }

    pub fn selected_category(&self) -> Option<i64> {
        self.selected_category
    }

    /// Sets the active search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Applies the category/search predicate locally.
    ///
    /// The backend already filtered when the request carried parameters;
    /// re-filtering here uses the identical predicate, so a cached
    /// product set yields the same result as a fresh fetch.
    pub fn filtered(&self) -> Vec<&Product> {
        filter::filter_products(&self.products, self.selected_category, &self.search)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cardapio_core::{Money, Variation};

    fn product(id: i64, category_id: i64, name: &str, stock: i64) -> Product {
        Product {
            id,
            category_id: Some(category_id),
            name: name.to_string(),
            description: None,
            price: Money::from_cents(10_000),
            image_url: None,
            stock,
            has_variations: false,
            variations: Vec::new(),
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut store = CatalogStore::new();

        let first = store.begin_products_fetch();
        let second = store.begin_products_fetch();

        // The second fetch lands first...
        assert!(store.apply_products(second, vec![product(2, 1, "Pizza", 5)]));
        // ...and the late first response must not clobber it
        assert!(!store.apply_products(first, vec![product(1, 1, "Frango", 5)]));

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].id, 2);
    }

    #[test]
    fn test_each_fetch_invalidates_earlier_ones() {
        let mut store = CatalogStore::new();

        let first = store.begin_products_fetch();
        assert!(store.apply_products(first, vec![product(1, 1, "Frango", 5)]));

        let second = store.begin_products_fetch();
        // Re-applying the old generation after a new fetch was issued fails
        assert!(!store.apply_products(first, vec![]));
        assert!(store.apply_products(second, vec![product(2, 1, "Pizza", 5)]));
    }

    #[test]
    fn test_local_refilter_matches_fetch_semantics() {
        let mut store = CatalogStore::new();
        let generation = store.begin_products_fetch();
        store.apply_products(
            generation,
            vec![
                product(1, 1, "Pizza Margherita", 5),
                product(2, 2, "Frango Grelhado", 5),
                product(3, 1, "Pizza Calabresa", 5),
            ],
        );

        store.select_category(Some(1));
        store.set_search("calabresa");

        let ids: Vec<i64> = store.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        store.select_category(None);
        store.set_search("");
        assert_eq!(store.filtered().len(), 3);
    }

    #[test]
    fn test_available_stock_resolution() {
        let mut store = CatalogStore::new();
        let mut p = product(1, 1, "Pizza", 2);
        p.has_variations = true;
        p.variations = vec![Variation {
            id: 9,
            name: "Grande".to_string(),
            price: Money::from_cents(60_000),
            stock: 7,
        }];
        let generation = store.begin_products_fetch();
        store.apply_products(generation, vec![p]);

        assert_eq!(store.available_stock(1, None), Some(2));
        assert_eq!(store.available_stock(1, Some(9)), Some(7));
        // Stale references resolve to nothing
        assert_eq!(store.available_stock(1, Some(8)), None);
        assert_eq!(store.available_stock(99, None), None);
    }
}
