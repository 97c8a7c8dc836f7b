// server/src/web/handlers/product_handlers.rs

use actix_web::{http::header, web, HttpResponse};
use catalog::ProductDto;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub const ADD_TO_CART_CONFIRMATION: &str = "Produto adicionado ao carrinho. Estoque diminuído em 1.";

fn not_found(id: i64) -> AppError {
  AppError::NotFound(format!("Product with ID {} not found.", id))
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.products.find_all().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  match app_state.products.find_by_id(id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => {
      warn!("Product with ID {} not found.", id);
      Err(not_found(id))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, body), fields(name = %body.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ProductDto>,
) -> Result<HttpResponse, AppError> {
  let saved = app_state.products.save(body.into_inner()).await?;
  let id = saved
    .id
    .ok_or_else(|| AppError::Internal("Saved product has no id.".to_string()))?;

  info!("Product {} created.", id);
  Ok(HttpResponse::Created()
    .insert_header((header::LOCATION, format!("/api/products/{}", id)))
    .json(saved))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<ProductDto>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  let updated = app_state.products.update(id, body.into_inner()).await?;
  Ok(HttpResponse::Ok().json(updated))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  if !app_state.products.exists_by_id(id).await? {
    warn!("Delete requested for missing product {}.", id);
    return Err(not_found(id));
  }
  // A concurrent delete between the check and here still ends with the row gone.
  app_state.products.delete_by_id(id).await?;
  Ok(HttpResponse::NoContent().finish())
}

/// Takes one unit of the product out of stock and answers in plain text.
///
/// The decrement runs inline, so the response reflects its real outcome.
#[instrument(name = "handler::add_to_cart", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  match app_state.products.decrease_stock(id).await {
    Ok(product) => {
      info!("Add to cart succeeded for product {}; {} left.", id, product.stock_quantity);
      Ok(HttpResponse::Ok()
        .content_type(header::ContentType::plaintext())
        .body(ADD_TO_CART_CONFIRMATION))
    }
    Err(e) if e.is_domain() => {
      warn!("Add to cart failed for product {}: {}", id, e);
      Ok(HttpResponse::BadRequest()
        .content_type(header::ContentType::plaintext())
        .body(format!("Erro: {}", e)))
    }
    Err(e) => Err(AppError::Catalog(e)),
  }
}
