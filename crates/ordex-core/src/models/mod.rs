//! Data models: extraction results, source documents, process configuration.

pub mod config;
pub mod document;
pub mod order;

pub use config::LlmConfig;
pub use document::{Fragment, SourceDocument, SourceOrigin};
pub use order::OrderExtraction;
