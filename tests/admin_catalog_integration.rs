//! Integration tests for admin catalog management and recommendations.
//!
//! These tests verify the wiring between the HTTP DTOs, application
//! handlers, and ports using in-memory fakes:
//! 1. Request DTOs deserialize correctly
//! 2. The password gate guards every catalog mutation
//! 3. Mutations re-fetch and return the full product list
//! 4. Recommendations filter by skin type and cap the result

use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use skinsage::adapters::http::admin::dto::ProductForm;
use skinsage::adapters::http::AdminHandlers;
use skinsage::adapters::storage::InMemoryPreferenceStore;
use skinsage::application::handlers::admin::{
    AuthenticateAdminCommand, AuthenticateAdminHandler, CreateProductCommand,
    CreateProductHandler, DeleteProductCommand, DeleteProductHandler, ListProductsHandler,
    UpdateProductCommand, UpdateProductHandler,
};
use skinsage::application::handlers::catalog::{
    ListRecommendationsHandler, ListRecommendationsQuery,
};
use skinsage::domain::catalog::{Product, ProductCategory, ProductDraft};
use skinsage::domain::foundation::{DomainError, ErrorCode, ProductId, Timestamp};
use skinsage::domain::survey::SkinType;
use skinsage::ports::{ProductReader, ProductRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory product store backing both ports.
struct FakeProductStore {
    products: Mutex<Vec<Product>>,
}

impl FakeProductStore {
    fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
        }
    }

    fn seeded(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for FakeProductStore {
    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = product.clone();
                existing.created_at = created_at;
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", product.id),
            )),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != *id);
        if products.len() == before {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductReader for FakeProductStore {
    async fn list_by_category(
        &self,
        category: ProductCategory,
        limit: u32,
    ) -> Result<Vec<Product>, DomainError> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        products.sort_by(|a, b| b.created_at.as_datetime().cmp(a.created_at.as_datetime()));
        products.truncate(limit as usize);
        Ok(products)
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.lock().unwrap().clone())
    }
}

fn product(name: &str, category: ProductCategory, skin_types: Vec<SkinType>) -> Product {
    product_aged(name, category, skin_types, 0)
}

fn product_aged(
    name: &str,
    category: ProductCategory,
    skin_types: Vec<SkinType>,
    age_days: i64,
) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        category,
        skin_types,
        price_range: "$10 - $20".to_string(),
        features: String::new(),
        ingredients: String::new(),
        keywords: Vec::new(),
        volume: "100ml".to_string(),
        purchase_url: None,
        image_url: None,
        created_at: Timestamp::now().minus_days(age_days),
    }
}

fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: ProductCategory::Toner,
        skin_types: vec![SkinType::Oily],
        price_range: "$12 - $18".to_string(),
        features: "Balancing toner".to_string(),
        ingredients: "Witch hazel".to_string(),
        keywords: vec!["balancing".to_string()],
        volume: "150ml".to_string(),
        purchase_url: None,
        image_url: None,
    }
}

async fn authenticated_store() -> Arc<InMemoryPreferenceStore> {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let auth = AuthenticateAdminHandler::new(store.clone(), "sk1n-adm1n".to_string());
    auth.handle(AuthenticateAdminCommand {
        password: "sk1n-adm1n".to_string(),
    })
    .await
    .unwrap();
    store
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_handler_wiring() {
    let fake = Arc::new(FakeProductStore::new());
    let store = Arc::new(InMemoryPreferenceStore::new());

    let _handlers = AdminHandlers::new(
        Arc::new(AuthenticateAdminHandler::new(
            store.clone(),
            "password".to_string(),
        )),
        Arc::new(ListProductsHandler::new(fake.clone(), store.clone())),
        Arc::new(CreateProductHandler::new(
            fake.clone(),
            fake.clone(),
            store.clone(),
        )),
        Arc::new(UpdateProductHandler::new(
            fake.clone(),
            fake.clone(),
            store.clone(),
        )),
        Arc::new(DeleteProductHandler::new(fake.clone(), fake, store)),
    );
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let auth = AuthenticateAdminHandler::new(store, "sk1n-adm1n".to_string());

    let err = auth
        .handle(AuthenticateAdminCommand {
            password: "guess".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Unauthorized);
}

#[tokio::test]
async fn test_mutations_require_authentication() {
    let fake = Arc::new(FakeProductStore::new());
    let store = Arc::new(InMemoryPreferenceStore::new());
    let create = CreateProductHandler::new(fake.clone(), fake, store);

    let err = create
        .handle(CreateProductCommand {
            draft: draft("Unauthorized Toner"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Forbidden);
}

#[tokio::test]
async fn test_create_returns_refreshed_list() {
    let fake = Arc::new(FakeProductStore::new());
    let store = authenticated_store().await;
    let create = CreateProductHandler::new(fake.clone(), fake, store);

    let products = create
        .handle(CreateProductCommand {
            draft: draft("Fresh Toner"),
        })
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Fresh Toner");
}

#[tokio::test]
async fn test_update_edits_an_existing_product() {
    let existing = product("Old Name", ProductCategory::Toner, vec![SkinType::Oily]);
    let id = existing.id;
    let fake = Arc::new(FakeProductStore::seeded(vec![existing]));
    let store = authenticated_store().await;
    let update = UpdateProductHandler::new(fake.clone(), fake, store);

    let products = update
        .handle(UpdateProductCommand {
            id,
            draft: draft("New Name"),
        })
        .await
        .unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "New Name");
}

#[tokio::test]
async fn test_update_of_unknown_product_fails() {
    let fake = Arc::new(FakeProductStore::new());
    let store = authenticated_store().await;
    let update = UpdateProductHandler::new(fake.clone(), fake, store);

    let err = update
        .handle(UpdateProductCommand {
            id: ProductId::new(),
            draft: draft("Ghost"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ProductNotFound);
}

#[tokio::test]
async fn test_delete_removes_the_product() {
    let existing = product("Doomed Cream", ProductCategory::Cream, vec![SkinType::Dry]);
    let id = existing.id;
    let fake = Arc::new(FakeProductStore::seeded(vec![existing]));
    let store = authenticated_store().await;
    let delete = DeleteProductHandler::new(fake.clone(), fake, store);

    let products = delete.handle(DeleteProductCommand { id }).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_recommendations_filter_and_cap() {
    let mut seeded = Vec::new();
    for i in 0..8 {
        seeded.push(product(
            &format!("Oily Toner {}", i),
            ProductCategory::Toner,
            vec![SkinType::Oily],
        ));
    }
    seeded.push(product(
        "Dry Toner",
        ProductCategory::Toner,
        vec![SkinType::Dry],
    ));
    let fake = Arc::new(FakeProductStore::seeded(seeded));
    let handler = ListRecommendationsHandler::new(fake);

    let list = handler
        .handle(ListRecommendationsQuery {
            category: ProductCategory::Toner,
            skin_type: SkinType::Oily,
        })
        .await;

    assert!(!list.store_unavailable);
    assert_eq!(list.products.len(), 5);
    assert!(list.products.iter().all(|p| p.suits(SkinType::Oily)));
}

#[tokio::test]
async fn test_recommendations_fetch_window_precedes_filtering() {
    // The ten newest toners hold only three oily matches; two older oily
    // toners sit outside the fetch window and must not fill the gap.
    let mut seeded = Vec::new();
    for i in 0..7 {
        seeded.push(product_aged(
            &format!("Dry Toner {}", i),
            ProductCategory::Toner,
            vec![SkinType::Dry],
            i,
        ));
    }
    for i in 7..10 {
        seeded.push(product_aged(
            &format!("Oily Toner {}", i),
            ProductCategory::Toner,
            vec![SkinType::Oily],
            i,
        ));
    }
    for i in 10..12 {
        seeded.push(product_aged(
            &format!("Old Oily Toner {}", i),
            ProductCategory::Toner,
            vec![SkinType::Oily],
            i,
        ));
    }
    let fake = Arc::new(FakeProductStore::seeded(seeded));
    let handler = ListRecommendationsHandler::new(fake);

    let list = handler
        .handle(ListRecommendationsQuery {
            category: ProductCategory::Toner,
            skin_type: SkinType::Oily,
        })
        .await;

    assert_eq!(list.products.len(), 3);
}

#[test]
fn test_product_form_deserializes() {
    let json = json!({
        "name": "Calming Mask",
        "category": "mask",
        "skin_types": ["sensitive"],
        "keywords": "soothing, calming",
        "volume": "25ml"
    });

    let json_str = serde_json::to_string(&json).unwrap();
    let form: ProductForm = serde_json::from_str(&json_str).unwrap();
    let draft = form.into_draft().unwrap();

    assert_eq!(draft.name, "Calming Mask");
    assert_eq!(draft.category, ProductCategory::Mask);
    assert_eq!(draft.skin_types, vec![SkinType::Sensitive]);
    assert_eq!(draft.keywords, vec!["soothing", "calming"]);
}
