pub mod app;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod model;
pub mod pages;
pub mod preview;
pub mod session;
pub mod store;
pub mod ui;

pub use app::Academy;
pub use config::AcademyConfig;
