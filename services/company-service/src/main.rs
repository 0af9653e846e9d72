use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use shared::config::Settings;
use std::sync::Arc;
use tokio_postgres::NoTls;
use tracing::{error, info};

use company_service::api;
use company_service::repository::{ensure_schema, PgCompanyRepository};
use company_service::service::CompanyService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    info!("starting company-service");

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            error!(%e, "failed to load settings");
            std::process::exit(1);
        }
    };

    let (client, connection) = match tokio_postgres::connect(&settings.database_url, NoTls).await {
        Ok(pair) => pair,
        Err(e) => {
            error!(%e, "failed to connect to postgres");
            std::process::exit(1);
        }
    };
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!(%e, "postgres connection task ended");
        }
    });
    let db = Arc::new(client);

    if let Err(e) = ensure_schema(&db).await {
        error!(%e, "failed to ensure schema");
        std::process::exit(1);
    }

    let repo = Arc::new(PgCompanyRepository::new(db));
    let service = web::Data::new(CompanyService::new(repo));

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(service.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", 8085))?
    .run()
    .await
}
