pub mod config;
pub mod datetime;
pub mod errors;
pub mod filters;
pub mod html;
pub mod models;
pub mod ordering;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod site;
pub mod store;

pub use config::PortalConfig;
pub use errors::{PortalError, PortalResult};
pub use routes::Route;
pub use store::RecordStore;
