//! Analysis Service HTTP Client
//!
//! reqwest-backed `AnalysisService`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AnalysisService, ChatRequest, ChatResponse, ReEvaluateRequest, ReEvaluation};
use crate::config::DashboardConfig;
use crate::constants;
use crate::error::ServiceError;
use crate::logic::record::AnalysisRecord;

/// HTTP client for the Analysis Service
pub struct AnalysisClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AnalysisClient {
    /// Create new client
    pub fn new(config: &DashboardConfig) -> Result<Self, ServiceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ServiceError::Client(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body, decode a JSON answer
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let response = self.http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ServiceError::from_transport)?;

        Self::decode(&url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ServiceError> {
        let status = response.status();
        if status.is_success() {
            response.json().await
                .map_err(|e| ServiceError::Parse(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            log::error!("{} failed ({}): {}", url, status.as_u16(), body);
            Err(ServiceError::Server { status: status.as_u16(), body })
        }
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn re_evaluate(&self, request: &ReEvaluateRequest) -> Result<ReEvaluation, ServiceError> {
        self.post_json(constants::RE_EVALUATE_PATH, request).await
    }

    async fn analyze(&self, filename: &str, content: Vec<u8>) -> Result<AnalysisRecord, ServiceError> {
        let url = self.url(constants::ANALYZE_PATH);
        log::info!("Uploading '{}' ({} bytes) for analysis", filename, content.len());

        let part = Part::bytes(content).file_name(filename.to_string());
        let form = Form::new().part(constants::UPLOAD_FIELD, part);

        let response = self.http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ServiceError::from_transport)?;

        Self::decode(&url, response).await
    }

    async fn chat(&self, question: &str, context: &AnalysisRecord) -> Result<String, ServiceError> {
        let request = ChatRequest { question, context };
        let response: ChatResponse = self.post_json(constants::CHAT_PATH, &request).await?;
        Ok(response.response)
    }
}
