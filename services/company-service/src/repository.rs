//! Data access for company records. One store operation per call, failures
//! propagate as `AppError::Store`.

use async_trait::async_trait;
use shared::dto::{Company, NewCompany};
use shared::error::{AppError, Result};
use std::sync::Arc;
use tokio_postgres::Client;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, new: NewCompany) -> Result<Company>;
    async fn get(&self, id: &str) -> Result<Company>;
    async fn list(&self) -> Result<Vec<Company>>;
    async fn update(&self, id: &str, new: NewCompany) -> Result<Company>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn ping(&self) -> Result<()>;
}

pub struct PgCompanyRepository {
    db: Arc<Client>,
}

impl PgCompanyRepository {
    pub fn new(db: Arc<Client>) -> Self {
        Self { db }
    }
}

pub async fn ensure_schema(db: &Client) -> Result<()> {
    db.execute(
        "CREATE TABLE IF NOT EXISTS companies ( \
            id TEXT PRIMARY KEY, \
            name TEXT NOT NULL, \
            ceo TEXT NOT NULL, \
            website TEXT NOT NULL, \
            stock_exchange TEXT NOT NULL, \
            turnover DOUBLE PRECISION NOT NULL \
        )",
        &[],
    )
    .await?;
    info!("companies schema ensured");
    Ok(())
}

fn row_to_company(r: tokio_postgres::Row) -> Company {
    Company {
        id: r.get(0),
        name: r.get(1),
        ceo: r.get(2),
        website: r.get(3),
        stock_exchange: r.get(4),
        turnover: r.get(5),
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, new: NewCompany) -> Result<Company> {
        let id = Uuid::new_v4().to_string();
        self.db
            .execute(
                "INSERT INTO companies (id, name, ceo, website, stock_exchange, turnover) \
                 VALUES ($1,$2,$3,$4,$5,$6)",
                &[&id, &new.name, &new.ceo, &new.website, &new.stock_exchange, &new.turnover],
            )
            .await?;
        Ok(Company {
            id,
            name: new.name,
            ceo: new.ceo,
            website: new.website,
            stock_exchange: new.stock_exchange,
            turnover: new.turnover,
        })
    }

    async fn get(&self, id: &str) -> Result<Company> {
        let row = self
            .db
            .query_opt(
                "SELECT id, name, ceo, website, stock_exchange, turnover \
                 FROM companies WHERE id = $1",
                &[&id],
            )
            .await?;
        row.map(row_to_company)
            .ok_or_else(|| AppError::NotFound(format!("company {id}")))
    }

    async fn list(&self) -> Result<Vec<Company>> {
        let rows = self
            .db
            .query(
                "SELECT id, name, ceo, website, stock_exchange, turnover FROM companies",
                &[],
            )
            .await?;
        Ok(rows.into_iter().map(row_to_company).collect())
    }

    async fn update(&self, id: &str, new: NewCompany) -> Result<Company> {
        let updated = self
            .db
            .execute(
                "UPDATE companies \
                 SET name=$2, ceo=$3, website=$4, stock_exchange=$5, turnover=$6 \
                 WHERE id=$1",
                &[&id, &new.name, &new.ceo, &new.website, &new.stock_exchange, &new.turnover],
            )
            .await?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("company {id}")));
        }
        Ok(Company {
            id: id.to_string(),
            name: new.name,
            ceo: new.ceo,
            website: new.website,
            stock_exchange: new.stock_exchange,
            turnover: new.turnover,
        })
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted = self
            .db
            .execute("DELETE FROM companies WHERE id = $1", &[&id])
            .await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("company {id}")));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.db.simple_query("SELECT 1").await?;
        Ok(())
    }
}
