pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod interactive;
pub mod logging;
pub mod render;
pub mod source;
pub mod store;

pub use browser::{MenuBrowser, Snapshot};
pub use error::{MenuError, Result};
pub use source::{CatalogOrigin, CatalogSource};
