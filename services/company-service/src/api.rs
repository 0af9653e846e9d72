//! HTTP surface: one route per service operation plus the generated OpenAPI
//! document and a liveness probe.

use actix_web::{web, HttpResponse, Responder};
use shared::dto::{Company, NewCompany};
use shared::error::AppError;
use tracing::info;
use utoipa::OpenApi;

use crate::service::CompanyService;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EStock Company Service API",
        description = "Company micro service for CRUD"
    ),
    paths(create_company, get_company, list_companies, update_company, delete_company),
    components(schemas(Company, NewCompany))
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/companies",
    request_body = NewCompany,
    responses((status = 201, description = "Company created", body = Company))
)]
async fn create_company(
    service: web::Data<CompanyService>,
    body: web::Json<NewCompany>,
) -> Result<HttpResponse, AppError> {
    let company = service.create(body.into_inner()).await?;
    info!(id = %company.id, "company created");
    Ok(HttpResponse::Created().json(company))
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company found", body = Company),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn get_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let company = service.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[utoipa::path(
    get,
    path = "/companies",
    responses((status = 200, description = "All companies", body = [Company]))
)]
async fn list_companies(service: web::Data<CompanyService>) -> Result<HttpResponse, AppError> {
    let companies = service.list().await?;
    Ok(HttpResponse::Ok().json(companies))
}

#[utoipa::path(
    put,
    path = "/companies/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    request_body = NewCompany,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn update_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
    body: web::Json<NewCompany>,
) -> Result<HttpResponse, AppError> {
    let company = service.update(&path.into_inner(), body.into_inner()).await?;
    info!(id = %company.id, "company updated");
    Ok(HttpResponse::Ok().json(company))
}

#[utoipa::path(
    delete,
    path = "/companies/{id}",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Unknown identifier")
    )
)]
async fn delete_company(
    service: web::Data<CompanyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service.delete(&id).await?;
    info!(%id, "company deleted");
    Ok(HttpResponse::NoContent().finish())
}

async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn health(service: web::Data<CompanyService>) -> impl Responder {
    if let Err(e) = service.ping().await {
        return HttpResponse::ServiceUnavailable().body(format!("store not ok: {e}"));
    }
    HttpResponse::Ok().body("OK")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/companies", web::post().to(create_company))
        .route("/companies", web::get().to(list_companies))
        .route("/companies/{id}", web::get().to(get_company))
        .route("/companies/{id}", web::put().to(update_company))
        .route("/companies/{id}", web::delete().to(delete_company))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .route("/health", web::get().to(health));
}
