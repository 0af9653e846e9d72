//! HTTP surface: one route per service operation plus the generated OpenAPI
//! document and a liveness probe.

use actix_web::{web, HttpResponse, Responder};
use shared::dto::{NewStock, Stock};
use shared::error::AppError;
use tracing::info;
use utoipa::OpenApi;

use crate::service::StockService;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EStock Stock Service API",
        description = "Stock micro service for CRUD"
    ),
    paths(create_stock, get_stock, list_stocks, update_stock, delete_stock),
    components(schemas(Stock, NewStock))
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/stocks",
    request_body = NewStock,
    responses((status = 201, description = "Stock created", body = Stock))
)]
async fn create_stock(
    service: web::Data<StockService>,
    body: web::Json<NewStock>,
) -> Result<HttpResponse, AppError> {
    let stock = service.create(body.into_inner()).await?;
    info!(id = %stock.id, symbol = %stock.symbol, "stock created");
    Ok(HttpResponse::Created().json(stock))
}

#[utoipa::path(
    get,
    path = "/stocks/{id}",
    params(("id" = String, Path, description = "Stock identifier")),
    responses(
        (status = 200, description = "Stock found", body = Stock),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn get_stock(
    service: web::Data<StockService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let stock = service.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(stock))
}

#[utoipa::path(
    get,
    path = "/stocks",
    responses((status = 200, description = "All stocks", body = [Stock]))
)]
async fn list_stocks(service: web::Data<StockService>) -> Result<HttpResponse, AppError> {
    let stocks = service.list().await?;
    Ok(HttpResponse::Ok().json(stocks))
}

#[utoipa::path(
    put,
    path = "/stocks/{id}",
    params(("id" = String, Path, description = "Stock identifier")),
    request_body = NewStock,
    responses(
        (status = 200, description = "Stock updated", body = Stock),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn update_stock(
    service: web::Data<StockService>,
    path: web::Path<String>,
    body: web::Json<NewStock>,
) -> Result<HttpResponse, AppError> {
    let stock = service.update(&path.into_inner(), body.into_inner()).await?;
    info!(id = %stock.id, symbol = %stock.symbol, "stock updated");
    Ok(HttpResponse::Ok().json(stock))
}

#[utoipa::path(
    delete,
    path = "/stocks/{id}",
    params(("id" = String, Path, description = "Stock identifier")),
    responses(
        (status = 204, description = "Stock deleted"),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn delete_stock(
    service: web::Data<StockService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.delete(&id).await?;
    info!(%id, "stock deleted");
    Ok(HttpResponse::NoContent().finish())
}

async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn health(service: web::Data<StockService>) -> impl Responder {
    if let Err(e) = service.ping().await {
        return HttpResponse::ServiceUnavailable().body(format!("store not ok: {e}"));
    }
    HttpResponse::Ok().body("OK")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/stocks", web::post().to(create_stock))
        .route("/stocks", web::get().to(list_stocks))
        .route("/stocks/{id}", web::get().to(get_stock))
        .route("/stocks/{id}", web::put().to(update_stock))
        .route("/stocks/{id}", web::delete().to(delete_stock))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .route("/health", web::get().to(health));
}
