//! # Base Render Pass
//!
//! Builds the structural views for all four regions from scratch on
//! every render. All user-facing copy lives here, next to where it is
//! placed into the page.

use super::views::{
    CardAction, CartLineRow, CartPanelView, CategoryButton, CategoryListView, PageView,
    ProductCard, ProductGridView, ProductImage, TableOption, ToastView, VariationModalView,
    VariationOption,
};
use super::{RenderContext, RenderPass};

/// Label of the "all categories" button.
pub const ALL_CATEGORIES_LABEL: &str = "Todos";

/// Grid placeholder when the filter matches nothing.
pub const NO_PRODUCTS_PLACEHOLDER: &str = "Nenhum produto encontrado";

/// Cart panel placeholder when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Carrinho vazio";

/// Card description fallback when the product has none.
pub const NO_DESCRIPTION_FALLBACK: &str = "Descrição não disponível";

/// Price prefix on variation products.
pub const PRICE_FROM_PREFIX: &str = "A partir de ";

/// Glyph shown when a product has no usable image.
pub const PLACEHOLDER_GLYPH: &str = "🍽️";

/// Backend placeholder path treated the same as "no image".
pub const DEFAULT_PRODUCT_IMAGE: &str = "/static/default_product.png";

/// Variation picker prompt line.
pub const VARIATION_PROMPT: &str = "Escolha uma opção:";

/// Table selector placeholder option.
pub const TABLE_PLACEHOLDER: &str = "Selecione uma mesa";

/// The structural projection pass.
pub struct BasePass;

impl RenderPass for BasePass {
    fn name(&self) -> &'static str {
        "base"
    }

    fn apply(&self, ctx: &RenderContext<'_>, page: &mut PageView) {
        page.categories = render_categories(ctx);
        page.products = render_products(ctx);
        page.variation_modal = render_variation_modal(ctx);
        page.cart = render_cart_panel(ctx);
        page.toasts = render_toasts(ctx);
    }
}

// =============================================================================
// Region Builders
// =============================================================================

fn render_categories(ctx: &RenderContext<'_>) -> CategoryListView {
    let selected = ctx.catalog.selected_category();

    let mut buttons = Vec::with_capacity(ctx.catalog.categories().len() + 1);
    buttons.push(CategoryButton {
        category_id: None,
        label: ALL_CATEGORIES_LABEL.to_string(),
        active: selected.is_none(),
        classes: Vec::new(),
    });

    for category in ctx.catalog.categories() {
        buttons.push(CategoryButton {
            category_id: Some(category.id),
            label: category.name.clone(),
            active: selected == Some(category.id),
            classes: Vec::new(),
        });
    }

    CategoryListView { buttons }
}

fn render_products(ctx: &RenderContext<'_>) -> ProductGridView {
    let filtered = ctx.catalog.filtered();

    if filtered.is_empty() {
        return ProductGridView {
            cards: Vec::new(),
            placeholder: Some(NO_PRODUCTS_PLACEHOLDER.to_string()),
        };
    }

    let cards = filtered
        .iter()
        .map(|product| {
            let image = match product.image_url.as_deref() {
                Some(url) if url != DEFAULT_PRODUCT_IMAGE => ProductImage::Photo {
                    url: url.to_string(),
                    alt: product.name.clone(),
                },
                _ => ProductImage::Glyph {
                    glyph: PLACEHOLDER_GLYPH.to_string(),
                },
            };

            let price_label = if product.has_variations {
                format!("{PRICE_FROM_PREFIX}{}", product.price.format())
            } else {
                product.price.format()
            };

            let (action, action_label) = if product.has_variations {
                (CardAction::OpenVariations, "Ver Opções".to_string())
            } else {
                (CardAction::AddToCart, "Adicionar".to_string())
            };

            let variations_note = product.has_variations.then(|| {
                format!("{} variações disponíveis", product.variations.len())
            });

            ProductCard {
                product_id: product.id,
                image,
                name: product.name.clone(),
                description: product
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string()),
                price_label,
                action,
                action_label,
                variations_note,
                classes: Vec::new(),
            }
        })
        .collect();

    ProductGridView {
        cards,
        placeholder: None,
    }
}

fn render_variation_modal(ctx: &RenderContext<'_>) -> Option<VariationModalView> {
    let product_id = ctx.ui.variation_modal?;
    // A stale id or a product without variations renders no modal at all
    let product = ctx.catalog.product(product_id)?;
    if product.variations.is_empty() {
        return None;
    }

    let options = product
        .variations
        .iter()
        .map(|variation| VariationOption {
            variation_id: variation.id,
            name: variation.name.clone(),
            stock_label: format!("Estoque: {}", variation.stock),
            price_label: variation.price.format(),
            classes: Vec::new(),
        })
        .collect();

    Some(VariationModalView {
        product_id: product.id,
        title: product.name.clone(),
        prompt: VARIATION_PROMPT.to_string(),
        options,
    })
}

fn render_cart_panel(ctx: &RenderContext<'_>) -> CartPanelView {
    let totals = ctx.cart.totals();

    let lines = ctx
        .cart
        .lines()
        .iter()
        .map(|line| CartLineRow {
            product_id: line.product_id,
            variation_id: line.variation_id,
            name: line.name.clone(),
            unit_price_label: format!("{} cada", line.unit_price.format()),
            quantity: line.quantity,
            classes: Vec::new(),
        })
        .collect();

    let tables = ctx
        .catalog
        .tables()
        .iter()
        .map(|table| TableOption {
            table_id: table.id,
            label: format!(
                "{} - Capacidade: {} pessoas - {}",
                table.name,
                table.capacity,
                table.status.label()
            ),
        })
        .collect();

    CartPanelView {
        open: ctx.ui.cart_open,
        count_badge: totals.count,
        lines,
        empty_message: ctx
            .cart
            .is_empty()
            .then(|| EMPTY_CART_MESSAGE.to_string()),
        total_label: totals.total.format(),
        tables,
        table_placeholder: TABLE_PLACEHOLDER.to_string(),
        selected_table: ctx.ui.selected_table,
        submit: ctx.order.control(),
    }
}

fn render_toasts(ctx: &RenderContext<'_>) -> Vec<ToastView> {
    ctx.notifier
        .active()
        .iter()
        .map(|toast| ToastView {
            kind: toast.kind,
            message: toast.message.clone(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use crate::order::OrderFlow;
    use crate::render::Renderer;
    use crate::state::{Cart, CatalogStore, UiState};
    use cardapio_core::{Category, Money, Product, Table, TableStatus, Variation};

    fn product(id: i64, name: &str, stock: i64) -> Product {
        Product {
            id,
            category_id: Some(1),
            name: name.to_string(),
            description: None,
            price: Money::from_cents(45_000),
            image_url: None,
            stock,
            has_variations: false,
            variations: Vec::new(),
        }
    }

    fn fixture() -> (CatalogStore, Cart, Notifier, UiState, OrderFlow) {
        let mut catalog = CatalogStore::new();
        catalog.set_categories(vec![
            Category {
                id: 1,
                name: "Pratos".to_string(),
            },
            Category {
                id: 2,
                name: "Bebidas".to_string(),
            },
        ]);
        let generation = catalog.begin_products_fetch();
        catalog.apply_products(generation, vec![product(1, "Frango Grelhado", 5)]);

        (
            catalog,
            Cart::new(),
            Notifier::new(),
            UiState::default(),
            OrderFlow::new(),
        )
    }

    fn render(
        catalog: &CatalogStore,
        cart: &Cart,
        notifier: &Notifier,
        ui: &UiState,
        order: &OrderFlow,
    ) -> PageView {
        Renderer::bare().render(&RenderContext {
            catalog,
            cart,
            notifier,
            ui,
            order,
        })
    }

    #[test]
    fn test_render_is_idempotent() {
        let (catalog, mut cart, notifier, ui, order) = fixture();
        let p = catalog.product(1).unwrap().clone();
        cart.add_item(&p).unwrap();

        let first = render(&catalog, &cart, &notifier, &ui, &order);
        let second = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exactly_one_category_button_active() {
        let (mut catalog, cart, notifier, ui, order) = fixture();

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(page.categories.buttons.len(), 3);
        assert!(page.categories.buttons[0].active);
        assert_eq!(page.categories.buttons[0].label, ALL_CATEGORIES_LABEL);

        catalog.select_category(Some(2));
        let page = render(&catalog, &cart, &notifier, &ui, &order);
        let active: Vec<&CategoryButton> = page
            .categories
            .buttons
            .iter()
            .filter(|b| b.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].category_id, Some(2));
    }

    #[test]
    fn test_empty_filter_renders_placeholder_not_empty_grid() {
        let (mut catalog, cart, notifier, ui, order) = fixture();
        catalog.set_search("inexistente");

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert!(page.products.cards.is_empty());
        assert_eq!(
            page.products.placeholder.as_deref(),
            Some(NO_PRODUCTS_PLACEHOLDER)
        );
    }

    #[test]
    fn test_card_fallbacks_and_direct_action() {
        let (catalog, cart, notifier, ui, order) = fixture();

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        let card = &page.products.cards[0];
        assert!(matches!(card.image, ProductImage::Glyph { .. }));
        assert_eq!(card.description, NO_DESCRIPTION_FALLBACK);
        assert_eq!(card.price_label, "450,00 MT");
        assert_eq!(card.action, CardAction::AddToCart);
        assert_eq!(card.action_label, "Adicionar");
        assert!(card.variations_note.is_none());
    }

    #[test]
    fn test_backend_placeholder_image_becomes_glyph() {
        let (mut catalog, cart, notifier, ui, order) = fixture();
        let mut p = product(1, "Frango Grelhado", 5);
        p.image_url = Some(DEFAULT_PRODUCT_IMAGE.to_string());
        let generation = catalog.begin_products_fetch();
        catalog.apply_products(generation, vec![p]);

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert!(matches!(
            page.products.cards[0].image,
            ProductImage::Glyph { .. }
        ));
    }

    #[test]
    fn test_variation_product_card() {
        let (mut catalog, cart, notifier, ui, order) = fixture();
        let mut p = product(7, "Pizza", 0);
        p.has_variations = true;
        p.variations = vec![
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
                stock: 2,
            },
        ];
        let generation = catalog.begin_products_fetch();
        catalog.apply_products(generation, vec![p]);

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        let card = &page.products.cards[0];
        assert_eq!(card.price_label, "A partir de 450,00 MT");
        assert_eq!(card.action, CardAction::OpenVariations);
        assert_eq!(card.action_label, "Ver Opções");
        assert_eq!(
            card.variations_note.as_deref(),
            Some("2 variações disponíveis")
        );
    }

    #[test]
    fn test_variation_modal_renders_for_open_product() {
        let (mut catalog, cart, notifier, mut ui, order) = fixture();
        let mut p = product(7, "Pizza", 0);
        p.has_variations = true;
        p.variations = vec![Variation {
            id: 2,
            name: "Grande".to_string(),
            price: Money::from_cents(60_000),
            stock: 2,
        }];
        let generation = catalog.begin_products_fetch();
        catalog.apply_products(generation, vec![p]);

        ui.variation_modal = Some(7);
        let page = render(&catalog, &cart, &notifier, &ui, &order);
        let modal = page.variation_modal.expect("modal should render");
        assert_eq!(modal.title, "Pizza");
        assert_eq!(modal.prompt, VARIATION_PROMPT);
        assert_eq!(modal.options[0].stock_label, "Estoque: 2");
        assert_eq!(modal.options[0].price_label, "600,00 MT");

        // A stale product id renders no modal
        ui.variation_modal = Some(99);
        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert!(page.variation_modal.is_none());
    }

    #[test]
    fn test_empty_cart_panel() {
        let (catalog, cart, notifier, ui, order) = fixture();

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(page.cart.count_badge, 0);
        assert_eq!(page.cart.empty_message.as_deref(), Some(EMPTY_CART_MESSAGE));
        assert_eq!(page.cart.total_label, "0,00 MT");
        assert!(!page.cart.open);
    }

    #[test]
    fn test_cart_panel_rows_and_total() {
        let (catalog, mut cart, notifier, ui, order) = fixture();
        let p = catalog.product(1).unwrap().clone();
        cart.add_item(&p).unwrap();
        cart.add_item(&p).unwrap();

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(page.cart.count_badge, 2);
        assert!(page.cart.empty_message.is_none());
        assert_eq!(page.cart.lines.len(), 1);
        assert_eq!(page.cart.lines[0].unit_price_label, "450,00 MT cada");
        assert_eq!(page.cart.lines[0].quantity, 2);
        assert_eq!(page.cart.total_label, "900,00 MT");
    }

    #[test]
    fn test_table_options_carry_status_labels() {
        let (mut catalog, cart, notifier, ui, order) = fixture();
        catalog.set_tables(vec![Table {
            id: 1,
            name: "Mesa 1".to_string(),
            capacity: 4,
            status: TableStatus::Free,
        }]);

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(page.cart.table_placeholder, TABLE_PLACEHOLDER);
        assert_eq!(
            page.cart.tables[0].label,
            "Mesa 1 - Capacidade: 4 pessoas - 🟢 Livre"
        );
    }

    #[test]
    fn test_toasts_projected() {
        let (catalog, cart, mut notifier, ui, order) = fixture();
        notifier.error("Quantidade máxima disponível atingida!");

        let page = render(&catalog, &cart, &notifier, &ui, &order);
        assert_eq!(page.toasts.len(), 1);
        assert_eq!(
            page.toasts[0].message,
            "Quantidade máxima disponível atingida!"
        );
    }
}
