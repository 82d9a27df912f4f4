//! Shared models and report interpretation for the DSS validation client.

pub mod document;
pub mod report;
pub mod request;

pub use document::*;
pub use report::*;
pub use request::*;
