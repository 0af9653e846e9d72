use crate::repository::CompanyRepository;
use shared::dto::{Company, NewCompany};
use shared::error::Result;
use std::sync::Arc;

/// Pass-through layer between the HTTP surface and storage. Applies no rules
/// of its own; it exists so callers never see the storage technology.
#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new: NewCompany) -> Result<Company> {
        self.repo.create(new).await
    }

    pub async fn get(&self, id: &str) -> Result<Company> {
        self.repo.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        self.repo.list().await
    }

    pub async fn update(&self, id: &str, new: NewCompany) -> Result<Company> {
        self.repo.update(id, new).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await
    }

    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }
}
