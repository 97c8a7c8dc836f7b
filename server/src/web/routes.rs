// server/src/web/routes.rs

use crate::errors::AppError;
use crate::web::handlers::product_handlers;
use actix_web::web;

// Liveness only; it does not touch the record store.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function will be called in `main.rs` (and by the HTTP tests) to configure the App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      // Malformed or incomplete product bodies get the same JSON envelope as other errors.
      AppError::Validation(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
      // A non-numeric `{id}` is a bad request, not a missing route.
      AppError::Validation(err.to_string()).into()
    }))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}", web::delete().to(product_handlers::delete_product_handler))
        .route(
          "/{id}/add-to-cart",
          web::post().to(product_handlers::add_to_cart_handler),
        ),
    );
}
