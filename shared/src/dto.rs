use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub ceo: String,
    pub website: String,
    pub stock_exchange: String,
    pub turnover: f64,
}

/// Payload for creating or replacing a company; the identifier is assigned by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewCompany {
    pub name: String,
    pub ceo: String,
    pub website: String,
    pub stock_exchange: String,
    pub turnover: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Stock {
    pub id: String,
    pub symbol: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewStock {
    pub symbol: String,
    pub quantity: i64,
    pub price: f64,
}

/// Queue payload applied by the stock consumer. A present `id` selects an
/// update, an absent one a create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMessage {
    #[serde(default)]
    pub id: Option<String>,
    pub symbol: String,
    pub quantity: i64,
    pub price: f64,
}

// Bare login models carried over from the auth surface. Token issuance is out
// of scope; these only define the wire shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticatedResponse {
    pub token: Option<String>,
}
