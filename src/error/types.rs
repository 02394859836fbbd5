// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

const FETCH_FAILED: &str = "Failed to fetch movies. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure: DNS, refused connection, timeout, truncated body
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status (`status` set) or malformed payload (`status` empty)
    #[error("API error{}: {message}", status_suffix(.status))]
    Api {
        status: Option<u16>,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

impl AppError {
    /// HTTP status reported by the metadata service, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// True when the remote service answered 404 or the resource is unknown locally
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound) || self.status() == Some(404)
    }

    /// Message shown to the user in place of the raw error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Could not reach the movie service. Check your connection and try again."
                    .to_string()
            }
            AppError::Api {
                status: Some(401), ..
            } => "The movie service rejected the access token.".to_string(),
            AppError::Api {
                status: Some(404), ..
            }
            | AppError::NotFound => "Movie not found".to_string(),
            AppError::Api { status: None, .. } => {
                "The movie service returned an unexpected response.".to_string()
            }
            AppError::Api { .. } => FETCH_FAILED.to_string(),
            AppError::Validation(message) => message.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// Message for a failed popular or search page, where a 404 is not about a movie
    pub fn list_fetch_message(&self) -> String {
        if self.is_not_found() {
            FETCH_FAILED.to_string()
        } else {
            self.user_message()
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api {
                status: err.status().map(|s| s.as_u16()),
                message: format!("Malformed response body: {}", err),
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
