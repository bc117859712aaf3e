pub mod config;
pub mod db;
pub mod error;
pub mod lifecycle;
pub mod middleware;
pub mod models;
pub mod proto;
pub mod realtime;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{AppError, AppResult};
