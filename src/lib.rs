//src/lib.rs

pub mod api;
pub mod common;
pub mod config;
pub mod models;
pub mod screens;
pub mod services;
pub mod session;

pub use common::error::{Alert, AppError};
pub use config::{AppConfig, AppState};
