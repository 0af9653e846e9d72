use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// Error taxonomy shared by the services. `Config` and `Broker` are fatal at
/// startup; `Store` and `NotFound` are surfaced to the HTTP caller.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Broker error: {0}")]
    Broker(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<tokio_postgres::Error> for AppError {
    fn from(err: tokio_postgres::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("stock s1".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "stock s1 not found");
    }

    #[test]
    fn store_maps_to_500() {
        let err = AppError::Store("connection refused".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
