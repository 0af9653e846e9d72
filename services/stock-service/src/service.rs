use crate::repository::StockRepository;
use shared::dto::{NewStock, Stock};
use shared::error::Result;
use std::sync::Arc;

/// Pass-through layer shared by the HTTP handlers and the queue consumer.
#[derive(Clone)]
pub struct StockService {
    repo: Arc<dyn StockRepository>,
}

impl StockService {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new: NewStock) -> Result<Stock> {
        self.repo.create(new).await
    }

    pub async fn get(&self, id: &str) -> Result<Stock> {
        self.repo.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Stock>> {
        self.repo.list().await
    }

    pub async fn update(&self, id: &str, new: NewStock) -> Result<Stock> {
        self.repo.update(id, new).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await
    }

    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }
}
