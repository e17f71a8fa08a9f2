//! Analysis Service Boundary
//!
//! The rule engine, the AI advisor and the chat assistant all live behind
//! one HTTP service. This module defines what the dashboard needs from it:
//! - re-evaluate a dataset's metadata under another standard
//! - analyze an uploaded dataset (creates the initial record)
//! - answer a question about the current record
//!
//! Raw rows never cross this boundary on re-evaluation, only metadata.

pub mod client;
#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::logic::record::{Analysis, AnalysisRecord, Metadata, Scores, Standard};

pub use client::AnalysisClient;

/// Body of `POST /analyze/re-evaluate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReEvaluateRequest {
    pub metadata: Metadata,
    pub standard: Standard,
}

/// Response of `POST /analyze/re-evaluate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReEvaluation {
    pub scores: Scores,
    pub analysis: Analysis,
}

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
    pub context: &'a AnalysisRecord,
}

/// Response of `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Re-score the dataset under `request.standard`
    async fn re_evaluate(&self, request: &ReEvaluateRequest) -> Result<ReEvaluation, ServiceError>;

    /// Full analysis of an uploaded dataset
    async fn analyze(&self, filename: &str, content: Vec<u8>) -> Result<AnalysisRecord, ServiceError>;

    /// Ask the assistant about `context`. The answer is opaque text.
    async fn chat(&self, question: &str, context: &AnalysisRecord) -> Result<String, ServiceError>;
}
