//! HTTP client module with status classification and error handling.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{HttpError, check_status};
