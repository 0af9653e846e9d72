use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use shared::config::{BrokerSettings, Settings};
use std::sync::Arc;
use tokio_postgres::NoTls;
use tracing::{error, info};

use stock_service::api;
use stock_service::consumer;
use stock_service::repository::{ensure_schema, PgStockRepository};
use stock_service::service::StockService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    info!("starting stock-service");

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            error!(%e, "failed to load settings");
            std::process::exit(1);
        }
    };
    let broker = match BrokerSettings::new() {
        Ok(s) => s,
        Err(e) => {
            error!(%e, "failed to load broker settings");
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

    let repo = Arc::new(PgStockRepository::new(db));
    let service = StockService::new(repo);

    if let Err(e) = shared::kafka::ensure_topic(&broker, &broker.stock_topic).await {
        error!(%e, "failed to ensure stock topic");
        std::process::exit(1);
    }
    let stock_consumer = match consumer::subscribe(&broker) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "failed to subscribe to broker");
            std::process::exit(1);
        }
    };
    actix_web::rt::spawn(consumer::run(stock_consumer, service.clone()));

    let data = web::Data::new(service);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", 8086))?
    .run()
    .await
}
