mod app;
mod config;
mod http;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
