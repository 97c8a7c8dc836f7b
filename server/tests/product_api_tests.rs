// server/tests/product_api_tests.rs

use actix_web::{http::StatusCode, test, web::Data, App};
use catalog::{InMemoryProductStore, Product, ProductDto};
use catalog_server::config::{AppConfig, StoreBackend};
use catalog_server::db::seed::seed_if_empty;
use catalog_server::state::AppState;
use catalog_server::web::configure_app_routes;
use catalog_server::web::handlers::product_handlers::ADD_TO_CART_CONFIRMATION;
use futures_util::future::join_all;
use once_cell::sync::Lazy;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

fn test_config(stock_check_delay: Duration) -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    store_backend: StoreBackend::Memory,
    database_url: None,
    database_max_connections: 1,
    run_migrations: false,
    seed_db: false,
    stock_check_delay,
  }
}

fn test_state(products: Vec<Product>) -> AppState {
  Lazy::force(&TRACING_INIT);
  AppState::new(
    &test_config(Duration::ZERO),
    Arc::new(InMemoryProductStore::with_products(products)),
  )
}

fn catalog() -> Vec<Product> {
  vec![Product::new("Keyboard", 49.90, 3), Product::new("Mouse", 19.50, 0)]
}

macro_rules! init_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(Data::new($state.clone()))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn test_health_check() {
  let state = test_state(Vec::new());
  let app = init_app!(state);
  let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn test_list_products() {
  let state = test_state(catalog());
  let app = init_app!(state);
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: Vec<ProductDto> = test::read_body_json(resp).await;
  assert_eq!(body.len(), 2);
  assert_eq!(body[0].id, Some(1));
  assert_eq!(body[0].name, "Keyboard");
  assert_eq!(body[1].stock_quantity, 0);
}

#[actix_web::test]
async fn test_list_products_empty() {
  let state = test_state(Vec::new());
  let app = init_app!(state);
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_get_product_found_and_missing() {
  let state = test_state(catalog());
  let app = init_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"id": 1, "name": "Keyboard", "price": 49.90, "stockQuantity": 3}));

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products/99").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().contains("99"));
}

#[actix_web::test]
async fn test_create_product_returns_created_with_location() {
  let state = test_state(catalog());
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/products")
    .set_json(json!({"name": "Widget", "price": 9.99, "stockQuantity": 5}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  assert_eq!(resp.headers().get("location").unwrap(), "/api/products/3");

  let created: ProductDto = test::read_body_json(resp).await;
  assert_eq!(created.id, Some(3));
  assert_eq!(created.name, "Widget");
  assert_eq!(created.stock_quantity, 5);
}

#[actix_web::test]
async fn test_create_product_rejects_malformed_body() {
  let state = test_state(Vec::new());
  let app = init_app!(state);
  let req = test::TestRequest::post()
    .uri("/api/products")
    .set_json(json!({"name": "No price"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().contains("price"));
  assert!(!state.products.exists_by_id(1).await.unwrap());
}

#[actix_web::test]
async fn test_update_product() {
  let state = test_state(catalog());
  let app = init_app!(state);

  let req = test::TestRequest::put()
    .uri("/api/products/2")
    .set_json(json!({"id": 1, "name": "Wireless Mouse", "price": 25.0, "stockQuantity": 7}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated: ProductDto = test::read_body_json(resp).await;
  assert_eq!(updated, ProductDto {
    id: Some(2),
    name: "Wireless Mouse".to_string(),
    price: 25.0,
    stock_quantity: 7,
  });

  let keyboard = state.products.find_by_id(1).await.unwrap().unwrap();
  assert_eq!(keyboard.name, "Keyboard");
}

#[actix_web::test]
async fn test_update_missing_product_is_not_found() {
  let state = test_state(catalog());
  let app = init_app!(state);
  let req = test::TestRequest::put()
    .uri("/api/products/42")
    .set_json(json!({"name": "Ghost", "price": 1.0, "stockQuantity": 1}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(!state.products.exists_by_id(42).await.unwrap());
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
  let state = test_state(catalog());
  let app = init_app!(state);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products/abc").to_request()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["error"].is_string());

  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/api/products/abc/add-to-cart").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(state.products.find_by_id(1).await.unwrap().unwrap().stock_quantity, 3);
}

#[actix_web::test]
async fn test_delete_product() {
  let state = test_state(catalog());
  let app = init_app!(state);

  let resp = test::call_service(&app, test::TestRequest::delete().uri("/api/products/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  assert!(test::read_body(resp).await.is_empty());

  let resp = test::call_service(&app, test::TestRequest::delete().uri("/api/products/1").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_widget_add_to_cart_until_out_of_stock() {
  let state = test_state(Vec::new());
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/products")
    .set_json(json!({"name": "Widget", "price": 9.99, "stockQuantity": 5}))
    .to_request();
  let created: ProductDto = test::read_body_json(test::call_service(&app, req).await).await;
  let id = created.id.unwrap();
  let add_to_cart_uri = format!("/api/products/{}/add-to-cart", id);

  for _ in 0..5 {
    let resp = test::call_service(&app, test::TestRequest::post().uri(&add_to_cart_uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, ADD_TO_CART_CONFIRMATION.as_bytes());
  }
  let widget = state.products.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(widget.stock_quantity, 0);

  let resp = test::call_service(&app, test::TestRequest::post().uri(&add_to_cart_uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(test::read_body(resp).await, "Erro: Product out of stock".as_bytes());
  assert_eq!(state.products.find_by_id(id).await.unwrap().unwrap().stock_quantity, 0);
}

#[actix_web::test]
async fn test_add_to_cart_missing_product() {
  let state = test_state(catalog());
  let app = init_app!(state);
  let resp = test::call_service(
    &app,
    test::TestRequest::post().uri("/api/products/9/add-to-cart").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(test::read_body(resp).await, "Erro: Product not found with id: 9".as_bytes());
}

#[actix_web::test]
async fn test_concurrent_add_to_cart_does_not_oversell() {
  Lazy::force(&TRACING_INIT);
  let state = AppState::new(
    &test_config(Duration::from_millis(10)),
    Arc::new(InMemoryProductStore::with_products(catalog())),
  );
  let app = init_app!(state);

  let requests = (0..8).map(|_| {
    test::call_service(
      &app,
      test::TestRequest::post().uri("/api/products/1/add-to-cart").to_request(),
    )
  });
  let statuses: Vec<StatusCode> = join_all(requests).await.into_iter().map(|r| r.status()).collect();

  assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 3);
  assert_eq!(statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count(), 5);
  assert_eq!(state.products.find_by_id(1).await.unwrap().unwrap().stock_quantity, 0);
}

#[actix_web::test]
async fn test_seed_only_fills_an_empty_store() {
  let empty = test_state(Vec::new());
  let inserted = seed_if_empty(&empty.products).await.unwrap();
  assert!(inserted > 0);
  assert_eq!(empty.products.find_all().await.unwrap().len(), inserted);

  let populated = test_state(catalog());
  assert_eq!(seed_if_empty(&populated.products).await.unwrap(), 0);
  assert_eq!(populated.products.find_all().await.unwrap().len(), 2);
}
