//! Chat-completion client with retry handling.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::prompt::SYSTEM_INSTRUCTION;
use super::Result;
use crate::error::LlmError;
use crate::models::LlmConfig;

/// Per-attempt request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Attempts allowed against rate limiting and transport failures.
const MAX_ATTEMPTS: u32 = 3;

/// Base backoff, multiplied by the attempt number.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// A client able to run one extraction conversation.
pub trait CompletionClient {
    /// Send the user content and return the assistant message text.
    fn complete(&self, user_content: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// First assistant message of a completion response, if any.
fn content_of(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

/// Client for an Azure OpenAI chat-completions deployment.
pub struct AzureOpenAiClient {
    config: LlmConfig,
    http: reqwest::Client,
    max_attempts: u32,
    retry_delay: Duration,
}

impl AzureOpenAiClient {
    /// Build a client from connection settings.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LlmError::ClientBuild(e.to_string()))?;

        Ok(Self {
            config,
            http,
            max_attempts: MAX_ATTEMPTS,
            retry_delay: RETRY_DELAY,
        })
    }

    fn request_body<'a>(&self, user_content: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

impl CompletionClient for AzureOpenAiClient {
    async fn complete(&self, user_content: &str) -> Result<String> {
        let url = self.config.completions_url();
        let body = self.request_body(user_content);

        for attempt in 1..=self.max_attempts {
            let outcome = self
                .http
                .post(&url)
                .header("api-key", &self.config.api_key)
                .json(&body)
                .send()
                .await;

            let response = match outcome {
                Ok(response) => response,
                Err(e) => {
                    if attempt < self.max_attempts {
                        warn!("completion request failed on attempt {}: {}", attempt, e);
                        tokio::time::sleep(self.retry_delay * attempt).await;
                        continue;
                    }
                    return Err(if e.is_timeout() {
                        LlmError::Timeout
                    } else {
                        LlmError::Connection(e.to_string())
                    });
                }
            };

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt < self.max_attempts {
                    warn!("completion API rate limited, attempt {}", attempt);
                    tokio::time::sleep(self.retry_delay * attempt).await;
                    continue;
                }
                return Err(LlmError::RateLimited {
                    attempts: self.max_attempts,
                });
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!("completion API returned {}: {}", status, body);
                return Err(LlmError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let parsed: ChatResponse = response
                .json()
                .await
                .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;
            return content_of(parsed).ok_or(LlmError::MalformedResponse);
        }

        Err(LlmError::RateLimited {
            attempts: self.max_attempts,
        })
    }
}

/// Scripted completion client recording every prompt it receives.
#[cfg(test)]
pub(crate) struct MockCompletionClient {
    reply: String,
    pub(crate) requests: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockCompletionClient {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl CompletionClient for MockCompletionClient {
    fn complete(&self, user_content: &str) -> impl Future<Output = Result<String>> + Send {
        self.requests.lock().unwrap().push(user_content.to_string());
        let reply = self.reply.clone();
        async move { Ok(reply) }
    }
}
