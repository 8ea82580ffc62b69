pub mod config;
pub mod store;

pub use config::AppConfig;
pub use store::ImageStore;
