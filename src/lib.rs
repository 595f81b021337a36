//! Request core of the corpus portal: resolve the dataset/model/attribute
//! address, build navigation menus, and render results as a page bag, JSON,
//! CSV or TSV.

pub mod address;
pub mod config;
pub mod error;
pub mod menu;
pub mod render;
pub mod request;
pub mod scope;

pub use address::{Address, Segment};
pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use menu::MenuBuilder;
pub use render::{Rendered, Table};
pub use request::Request;
pub use scope::RequestScope;
