//! # Backend API Client
//!
//! Wire types and the `MenuApi` trait the engine talks to.
//!
//! ## Why a Trait?
//! Every network interaction goes through [`MenuApi`] so the integration
//! tests drive the full engine against an in-memory fake backend. The
//! production implementation is [`HttpMenuApi`] (reqwest).
//!
//! ## Wire vs Domain
//! The backend serializes prices as decimal numbers and uses empty
//! strings where the domain wants `None`. DTOs in this module absorb
//! those quirks once, at the boundary; everything past here speaks
//! [`cardapio_core`] types with integer-centavo [`Money`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cardapio_core::{Category, Money, Product, Table, Variation};

use crate::config::{endpoints, ApiConfig};
use crate::error::{ApiError, ApiResult};
use crate::state::Cart;

// =============================================================================
// Product Query
// =============================================================================

/// Filter parameters for a product fetch.
///
/// The same values feed the request parameters here and the local
/// re-filter in the catalog store, keeping both sides of the wire on one
/// predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category_id: Option<i64>,
    pub search: String,
}

impl ProductQuery {
    /// Request parameters in backend naming (`categoria_id`, `busca`).
    /// Empty filters produce no parameters at all.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category_id) = self.category_id {
            params.push(("categoria_id", category_id.to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("busca", search.to_string()));
        }
        params
    }
}

// =============================================================================
// Wire DTOs
// =============================================================================

/// Product as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub has_variations: bool,
    #[serde(default)]
    pub variations: Vec<VariationDto>,
}

/// Variation as the backend serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct VariationDto {
    pub id: i64,
    #[serde(alias = "variation_name")]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl From<VariationDto> for Variation {
    fn from(dto: VariationDto) -> Self {
        Variation {
            id: dto.id,
            name: dto.name,
            price: Money::from_decimal(dto.price),
            stock: dto.stock,
        }
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        let none_if_empty = |s: String| if s.trim().is_empty() { None } else { Some(s) };

        Product {
            id: dto.id,
            category_id: dto.category_id,
            name: dto.name,
            description: none_if_empty(dto.description),
            price: Money::from_decimal(dto.price),
            image_url: none_if_empty(dto.image_url),
            stock: dto.stock,
            has_variations: dto.has_variations,
            variations: dto.variations.into_iter().map(Variation::from).collect(),
        }
    }
}

// =============================================================================
// Order Submission Types
// =============================================================================

/// One submitted line item, in backend naming.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<i64>,
    pub name: String,
    /// Unit price as a decimal, the way the backend expects it back.
    pub price: f64,
    pub quantity: i64,
}

/// Body of `POST /api/fazer_pedido`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub mesa_id: i64,
    pub itens: Vec<OrderItem>,
}

impl OrderRequest {
    /// Snapshots the cart into a submission body for the given table.
    pub fn from_cart(mesa_id: i64, cart: &Cart) -> Self {
        OrderRequest {
            mesa_id,
            itens: cart
                .lines()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id,
                    variation_id: line.variation_id,
                    name: line.name.clone(),
                    price: line.unit_price.cents() as f64 / 100.0,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

/// Raw submission response.
#[derive(Debug, Clone, Deserialize)]
struct OrderResponseDto {
    success: bool,
    #[serde(default)]
    order_id: Option<i64>,
    /// Pre-formatted total string, echoed back to the user verbatim.
    #[serde(default)]
    total: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Logical outcome of an order submission.
///
/// `Rejected` is a *successful* HTTP exchange whose payload reports a
/// business failure; transport problems surface as [`ApiError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Accepted { order_id: i64, total: String },
    Rejected { message: String },
}

impl TryFrom<OrderResponseDto> for OrderOutcome {
    type Error = ApiError;

    fn try_from(dto: OrderResponseDto) -> Result<Self, Self::Error> {
        if dto.success {
            let order_id = dto.order_id.ok_or_else(|| {
                ApiError::InvalidResponse("successful order without order_id".to_string())
            })?;
            Ok(OrderOutcome::Accepted {
                order_id,
                total: dto.total.unwrap_or_default(),
            })
        } else {
            Ok(OrderOutcome::Rejected {
                message: dto
                    .message
                    .unwrap_or_else(|| "Erro ao fazer pedido. Tente novamente.".to_string()),
            })
        }
    }
}

// =============================================================================
// MenuApi Trait
// =============================================================================

/// The backend surface the engine consumes.
#[async_trait]
pub trait MenuApi {
    async fn categories(&self) -> ApiResult<Vec<Category>>;

    async fn products(&self, query: &ProductQuery) -> ApiResult<Vec<Product>>;

    async fn tables(&self) -> ApiResult<Vec<Table>>;

    async fn submit_order(&self, order: &OrderRequest) -> ApiResult<OrderOutcome>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// reqwest-backed [`MenuApi`] implementation.
#[derive(Debug, Clone)]
pub struct HttpMenuApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpMenuApi {
    /// Builds the HTTP client from a resolved configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(HttpMenuApi { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.config.url(endpoint);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MenuApi for HttpMenuApi {
    async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.get_json(endpoints::CATEGORIES, &[]).await
    }

    async fn products(&self, query: &ProductQuery) -> ApiResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self
            .get_json(endpoints::PRODUCTS, &query.params())
            .await?;
        Ok(dtos.into_iter().map(Product::from).collect())
    }

    async fn tables(&self) -> ApiResult<Vec<Table>> {
        self.get_json(endpoints::TABLES, &[]).await
    }

    async fn submit_order(&self, order: &OrderRequest) -> ApiResult<OrderOutcome> {
        let url = self.config.url(endpoints::SUBMIT_ORDER);
        debug!(%url, items = order.itens.len(), "POST order");

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await?
            .error_for_status()?;

        let dto: OrderResponseDto = response.json().await?;
        OrderOutcome::try_from(dto)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_dto_conversion() {
        let json = r#"{
            "id": 1,
            "name": "Frango Grelhado",
            "description": "",
            "price": 450.5,
            "price_formatted": "450,50 MT",
            "stock": 8,
            "image_url": "",
            "has_variations": false
        }"#;

        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let product = Product::from(dto);

        assert_eq!(product.id, 1);
        assert_eq!(product.price.cents(), 45_050);
        // Empty strings collapse to None
        assert_eq!(product.description, None);
        assert_eq!(product.image_url, None);
        assert!(product.variations.is_empty());
    }

    #[test]
    fn test_variation_dto_accepts_legacy_field_name() {
        let json = r#"{"id": 9, "variation_name": "Grande", "price": 600.0, "stock": 3}"#;
        let dto: VariationDto = serde_json::from_str(json).unwrap();
        let variation = Variation::from(dto);

        assert_eq!(variation.name, "Grande");
        assert_eq!(variation.price.cents(), 60_000);
    }

    #[test]
    fn test_query_params() {
        let query = ProductQuery {
            category_id: Some(3),
            search: "  pizza ".to_string(),
        };
        assert_eq!(
            query.params(),
            vec![
                ("categoria_id", "3".to_string()),
                ("busca", "pizza".to_string())
            ]
        );

        assert!(ProductQuery::default().params().is_empty());
    }

    #[test]
    fn test_order_outcome_accepted() {
        let dto: OrderResponseDto = serde_json::from_str(
            r#"{"success": true, "order_id": 42, "total": "1.200,00 MT"}"#,
        )
        .unwrap();

        assert_eq!(
            OrderOutcome::try_from(dto).unwrap(),
            OrderOutcome::Accepted {
                order_id: 42,
                total: "1.200,00 MT".to_string()
            }
        );
    }

    #[test]
    fn test_order_outcome_rejected_keeps_backend_message() {
        let dto: OrderResponseDto =
            serde_json::from_str(r#"{"success": false, "message": "Mesa ocupada"}"#).unwrap();

        assert_eq!(
            OrderOutcome::try_from(dto).unwrap(),
            OrderOutcome::Rejected {
                message: "Mesa ocupada".to_string()
            }
        );
    }

    #[test]
    fn test_success_without_order_id_violates_contract() {
        let dto: OrderResponseDto = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            OrderOutcome::try_from(dto),
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_order_item_omits_absent_variation() {
        let item = OrderItem {
            product_id: 1,
            variation_id: None,
            name: "Frango Grelhado".to_string(),
            price: 450.0,
            quantity: 2,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("variation_id"));
    }
}
