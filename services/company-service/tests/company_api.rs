use actix_web::{test, web, App};
use async_trait::async_trait;
use company_service::api;
use company_service::repository::CompanyRepository;
use company_service::service::CompanyService;
use shared::dto::{Company, NewCompany};
use shared::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Storage double backing the service under test.
#[derive(Default)]
struct InMemoryCompanies {
    rows: RwLock<HashMap<String, Company>>,
}

fn with_id(id: &str, new: NewCompany) -> Company {
    Company {
        id: id.to_string(),
        name: new.name,
        ceo: new.ceo,
        website: new.website,
        stock_exchange: new.stock_exchange,
        turnover: new.turnover,
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanies {
    async fn create(&self, new: NewCompany) -> Result<Company> {
        let company = with_id(&Uuid::new_v4().to_string(), new);
        self.rows
            .write()
            .await
            .insert(company.id.clone(), company.clone());
        Ok(company)
    }

    async fn get(&self, id: &str) -> Result<Company> {
        self.rows
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("company {id}")))
    }

    async fn list(&self) -> Result<Vec<Company>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn update(&self, id: &str, new: NewCompany) -> Result<Company> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(id) {
            return Err(AppError::NotFound(format!("company {id}")));
        }
        let company = with_id(id, new);
        rows.insert(id.to_string(), company.clone());
        Ok(company)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("company {id}")))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

fn service() -> CompanyService {
    CompanyService::new(Arc::new(InMemoryCompanies::default()))
}

fn acme() -> NewCompany {
    NewCompany {
        name: "ACME Corp".into(),
        ceo: "Wile E. Coyote".into(),
        website: "https://acme.example".into(),
        stock_exchange: "NYSE".into(),
        turnover: 1_000_000.0,
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let svc = service();
    let created = svc.create(acme()).await.unwrap();
    let fetched = svc.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "ACME Corp");
    assert_eq!(fetched.turnover, 1_000_000.0);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let svc = service();
    let created = svc.create(acme()).await.unwrap();
    svc.delete(&created.id).await.unwrap();
    assert!(matches!(
        svc.get(&created.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn update_of_missing_id_creates_nothing() {
    let svc = service();
    assert!(matches!(
        svc.update("missing", acme()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(svc.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_every_created_company() {
    let svc = service();
    for _ in 0..3 {
        svc.create(acme()).await.unwrap();
    }
    let companies = svc.list().await.unwrap();
    assert_eq!(companies.len(), 3);
    let mut ids: Vec<_> = companies.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[actix_web::test]
async fn post_then_get_over_http() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/companies")
        .set_json(acme())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Company = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/companies/{}", created.id))
        .to_request();
    let fetched: Company = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn get_unknown_company_is_404() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/companies/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn openapi_document_lists_crud_paths() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service()))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let paths = doc["paths"].as_object().unwrap();
    assert!(paths.contains_key("/companies"));
    assert!(paths.contains_key("/companies/{id}"));
}
