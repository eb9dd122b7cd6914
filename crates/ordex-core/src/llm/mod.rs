//! Hosted completion API integration.

mod client;
mod prompt;

pub use client::{AzureOpenAiClient, CompletionClient};
pub use prompt::SYSTEM_INSTRUCTION;

#[cfg(test)]
pub(crate) use client::MockCompletionClient;

use crate::error::LlmError;

/// Result type for completion operations.
pub type Result<T> = std::result::Result<T, LlmError>;
