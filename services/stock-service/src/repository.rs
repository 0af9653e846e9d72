//! Data access for stock records. One store operation per call, failures
//! propagate as `AppError::Store`.

use async_trait::async_trait;
use shared::dto::{NewStock, Stock};
use shared::error::{AppError, Result};
use std::sync::Arc;
use tokio_postgres::Client;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn create(&self, new: NewStock) -> Result<Stock>;
    async fn get(&self, id: &str) -> Result<Stock>;
    async fn list(&self) -> Result<Vec<Stock>>;
    async fn update(&self, id: &str, new: NewStock) -> Result<Stock>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn ping(&self) -> Result<()>;
}

pub struct PgStockRepository {
    db: Arc<Client>,
}

impl PgStockRepository {
    pub fn new(db: Arc<Client>) -> Self {
        Self { db }
    }
}

pub async fn ensure_schema(db: &Client) -> Result<()> {
    db.execute(
        "CREATE TABLE IF NOT EXISTS stocks ( \
            id TEXT PRIMARY KEY, \
            symbol TEXT NOT NULL, \
            quantity BIGINT NOT NULL, \
            price DOUBLE PRECISION NOT NULL \
        )",
        &[],
    )
    .await?;
    info!("stocks schema ensured");
    Ok(())
}

fn row_to_stock(r: tokio_postgres::Row) -> Stock {
    Stock {
        id: r.get(0),
        symbol: r.get(1),
        quantity: r.get(2),
        price: r.get(3),
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn create(&self, new: NewStock) -> Result<Stock> {
        let id = Uuid::new_v4().to_string();
        self.db
            .execute(
                "INSERT INTO stocks (id, symbol, quantity, price) VALUES ($1,$2,$3,$4)",
                &[&id, &new.symbol, &new.quantity, &new.price],
            )
            .await?;
        Ok(Stock {
            id,
            symbol: new.symbol,
            quantity: new.quantity,
            price: new.price,
        })
    }

    async fn get(&self, id: &str) -> Result<Stock> {
        let row = self
            .db
            .query_opt(
                "SELECT id, symbol, quantity, price FROM stocks WHERE id = $1",
                &[&id],
            )
            .await?;
        row.map(row_to_stock)
            .ok_or_else(|| AppError::NotFound(format!("stock {id}")))
    }

    async fn list(&self) -> Result<Vec<Stock>> {
        let rows = self
            .db
            .query("SELECT id, symbol, quantity, price FROM stocks", &[])
            .await?;
        Ok(rows.into_iter().map(row_to_stock).collect())
    }

    async fn update(&self, id: &str, new: NewStock) -> Result<Stock> {
        let updated = self
            .db
            .execute(
                "UPDATE stocks SET symbol=$2, quantity=$3, price=$4 WHERE id=$1",
                &[&id, &new.symbol, &new.quantity, &new.price],
            )
            .await?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("stock {id}")));
        }
        Ok(Stock {
            id: id.to_string(),
            symbol: new.symbol,
            quantity: new.quantity,
            price: new.price,
        })
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted = self
            .db
            .execute("DELETE FROM stocks WHERE id = $1", &[&id])
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("stock {id}")));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.db.simple_query("SELECT 1").await?;
        Ok(())
    }
}
