//! Cleaning handler.

use axum::{extract::State, Json};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sieve::{ColumnReport, ProcessSummary, RowProblem};
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for the clean endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanRequest {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub folder_path: String,
    /// Base64-encoded file contents.
    #[serde(default)]
    pub file_content: String,
    #[serde(default = "default_target_table")]
    pub target_table: String,
}

fn default_file_name() -> String {
    "unknown.csv".to_string()
}

fn default_target_table() -> String {
    "DefaultTable".to_string()
}

/// Response for the clean endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanResponse {
    pub status: &'static str,
    pub file_name: String,
    pub folder_path: String,
    pub target_table: String,
    #[serde(flatten)]
    pub summary: ProcessSummary,
    /// Base64-encoded clean CSV.
    pub clean_data_base64: String,
    pub dirty_row_details: Vec<RowProblem>,
    pub column_analysis: ColumnReport,
    pub processed_at: String,
}

/// Decode the uploaded file, split it, and return the clean rows.
pub async fn clean_data(
    State(state): State<AppState>,
    payload: Result<Json<CleanRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<Json<CleanResponse>, ApiError> {
    let Json(request) = payload?;

    let contents = BASE64_STANDARD
        .decode(request.file_content.trim())
        .map_err(|e| ApiError::InvalidPayload(format!("fileContent is not valid base64: {}", e)))?;

    info!(
        file = %request.file_name,
        target = %request.target_table,
        bytes = contents.len(),
        "clean request received"
    );

    // Classification is CPU-bound; keep it off the async workers
    let sieve = state.sieve.clone();
    let file_name = request.file_name.clone();
    let report = tokio::task::spawn_blocking(move || sieve.process_bytes(file_name, &contents))
        .await
        .map_err(|e| ApiError::Internal(format!("processing task failed: {}", e)))??;

    let summary = report.summary();
    let clean_data_base64 = BASE64_STANDARD.encode(report.clean_csv()?);
    let outcome = report.outcome;

    Ok(Json(CleanResponse {
        status: "SUCCESS",
        file_name: request.file_name,
        folder_path: request.folder_path,
        target_table: request.target_table,
        summary,
        clean_data_base64,
        dirty_row_details: outcome.problems,
        column_analysis: outcome.columns,
        processed_at: Utc::now().to_rfc3339(),
    }))
}
