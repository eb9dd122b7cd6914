//! Error types for the ordex-core library.

use thiserror::Error;

/// Main error type for the ordex library.
#[derive(Error, Debug)]
pub enum OrdexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Completion API error.
    #[error("completion API error: {0}")]
    Llm(#[from] LlmError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Neither email text nor PDF text was available for analysis.
    #[error("no analyzable content")]
    NoContent,
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to the hosted completion API.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Could not reach the API endpoint.
    #[error("failed to connect to completion API: {0}")]
    Connection(String),

    /// The request exceeded the per-attempt timeout.
    #[error("completion API request timed out")]
    Timeout,

    /// Still rate-limited after every allowed attempt.
    #[error("completion API rate limit persisted after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Any non-success HTTP status other than 429.
    #[error("completion API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("failed to parse completion API response: {0}")]
    ResponseParsing(String),

    /// The response JSON lacked the expected choices/message/content shape.
    #[error("completion API response missing expected structure")]
    MalformedResponse,
}

/// Errors related to process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Result type for the ordex library.
pub type Result<T> = std::result::Result<T, OrdexError>;
