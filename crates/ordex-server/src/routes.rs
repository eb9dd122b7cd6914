//! Route handlers for the order analysis service.
//!
//! A single `/analyze_email_and_pdf` endpoint serves two request shapes:
//! a raw `application/pdf` upload (order ID lookup only) and a JSON body
//! carrying the email text and an optional base64 PDF attachment (full
//! analysis).

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use ordex_core::error::{LlmError, OrdexError};
use ordex_core::llm::AzureOpenAiClient;
use ordex_core::pipeline::{analyze_order, order_id_from_pdf, AnalysisInput};

// ── Constants ────────────────────────────────────────────────────────────

/// Uploads smaller than this are rejected as truncated or empty.
const MIN_PDF_BYTES: usize = 1000;

/// Upper bound on request bodies, generous enough for scanned PDFs.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

const PDF_TOO_SMALL: &str = "Le fichier PDF est vide ou incomplet";
const NO_ORDER_ID: &str = "Aucun ID de commande trouvé dans le PDF.";
const NO_CONTENT: &str = "Aucun contenu à analyser (ni email ni PDF)";
const ANALYSIS_FAILED: &str = "Erreur lors de l'analyse des données.";

// ── State and wire types ─────────────────────────────────────────────────

/// Shared application state handed to every handler.
pub struct AppState {
    pub client: AzureOpenAiClient,
}

/// JSON body accepted by the analysis endpoint.
#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    /// Address of the supplier who sent the email, used to fill in an
    /// empty supplier marker left by the mail template.
    #[serde(default)]
    sender_email: String,
    #[serde(default)]
    email: Option<String>,
    /// Base64-encoded PDF attachment, if the email carried one.
    #[serde(default)]
    pdf_base64: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

// ── Router ───────────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze_email_and_pdf", post(analyze))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    if is_pdf_upload(&headers) {
        return analyze_pdf_upload(&body);
    }

    let request: AnalyzeRequest = serde_json::from_slice(&body)
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Requête JSON invalide : {e}")))?;

    let input = AnalysisInput {
        sender_email: request.sender_email,
        email_body: request.email,
        pdf_attachment: request.pdf_base64.as_deref().and_then(decode_attachment),
    };

    let extraction = analyze_order(&state.client, &input)
        .await
        .map_err(map_analysis_error)?;
    info!("analysis complete, order id: {:?}", extraction.order_id);
    Ok(Json(extraction).into_response())
}

/// Raw PDF uploads skip the language model entirely and only look up the
/// order ID printed on the document.
fn analyze_pdf_upload(body: &[u8]) -> Result<Response, (StatusCode, String)> {
    if body.len() < MIN_PDF_BYTES {
        return Err((StatusCode::BAD_REQUEST, PDF_TOO_SMALL.to_string()));
    }
    let order_id = order_id_from_pdf(body).map_err(|e| internal_error(&e))?;
    match order_id {
        Some(id) => {
            info!("order id found in uploaded PDF: {}", id);
            Ok(Json(serde_json::json!({ "ID_commande": id })).into_response())
        }
        None => Err((StatusCode::NOT_FOUND, NO_ORDER_ID.to_string())),
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────

fn is_pdf_upload(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/pdf"))
}

/// Decodes a base64 attachment, dropping it with a warning when the
/// payload is not valid base64 so the email text can still be analyzed.
fn decode_attachment(encoded: &str) -> Option<Vec<u8>> {
    match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("failed to decode pdf_base64: {}", e);
            None
        }
    }
}

fn map_analysis_error(e: OrdexError) -> (StatusCode, String) {
    match &e {
        OrdexError::NoContent => (StatusCode::BAD_REQUEST, NO_CONTENT.to_string()),
        OrdexError::Llm(LlmError::MalformedResponse) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED.to_string())
        }
        _ => internal_error(&e),
    }
}

fn internal_error(e: &impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Erreur interne : {e}"))
}
