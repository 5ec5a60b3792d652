//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, WindowsConfig, DEFAULT_LOG_LEVEL};
