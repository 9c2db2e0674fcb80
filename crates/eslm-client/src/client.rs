//! HTTP client for the ESLM backend

use crate::error::{ClientError, ClientResult};
use eslm_types::*;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// HTTP client for the ESLM backend API
#[derive(Debug, Clone)]
pub struct EslmClient {
    client: Client,
    base_url: String,
}

/// Body of `POST /api/prompts`
#[derive(Debug, Clone, Serialize)]
pub struct PromptSubmission<'a> {
    pub prompt: &'a str,
}

impl EslmClient {
    /// Create a new client against `endpoint` (scheme, host and port).
    ///
    /// The underlying HTTP client keeps its defaults; no timeout is set.
    pub fn new(endpoint: &str) -> ClientResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========== Dashboard API ==========

    /// Aggregate dashboard statistics
    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/api/dashboard/stats").await
    }

    // ========== Capability API ==========

    pub async fn list_capabilities(&self) -> ClientResult<Vec<Capability>> {
        self.get("/api/capabilities").await
    }

    pub async fn get_capability(&self, id: &str) -> ClientResult<Capability> {
        self.get(&format!("/api/capabilities/{}", id)).await
    }

    /// Create a capability from a partial payload
    pub async fn create_capability(&self, draft: &CapabilityDraft) -> ClientResult<Capability> {
        self.post("/api/capabilities", draft).await
    }

    /// Update a capability with a partial payload
    pub async fn update_capability(
        &self,
        id: &str,
        draft: &CapabilityDraft,
    ) -> ClientResult<Capability> {
        self.put(&format!("/api/capabilities/{}", id), draft).await
    }

    // ========== Enabler API ==========

    pub async fn list_enablers(&self) -> ClientResult<Vec<Enabler>> {
        self.get("/api/enablers").await
    }

    pub async fn get_enabler(&self, id: &str) -> ClientResult<Enabler> {
        self.get(&format!("/api/enablers/{}", id)).await
    }

    // ========== Story API ==========

    pub async fn list_stories(&self) -> ClientResult<Vec<Story>> {
        self.get("/api/stories").await
    }

    pub async fn get_story(&self, id: &str) -> ClientResult<Story> {
        self.get(&format!("/api/stories/{}", id)).await
    }

    // ========== Health API ==========

    /// Service health list
    pub async fn service_health(&self) -> ClientResult<Vec<ServiceHealth>> {
        self.get("/api/health/services").await
    }

    // ========== Prompt API ==========

    /// Submit a prompt for generation
    pub async fn submit_prompt(&self, prompt: &str) -> ClientResult<UserPrompt> {
        self.post("/api/prompts", &PromptSubmission { prompt }).await
    }

    /// Prompt history
    pub async fn prompt_history(&self) -> ClientResult<Vec<UserPrompt>> {
        self.get("/api/prompts").await
    }

    /// Generated outputs, optionally filtered by prompt
    pub async fn outputs(&self, prompt_id: Option<&str>) -> ClientResult<Vec<OutputDelivery>> {
        let url = format!("{}/api/outputs", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(id) = prompt_id {
            request = request.query(&[("promptId", id)]);
        }
        debug!(%url, ?prompt_id, "GET");
        let response = request.send().await?;
        self.handle_response(response).await
    }

    // ========== SLM API ==========

    pub async fn slm_config(&self) -> ClientResult<SlmConfig> {
        self.get("/api/slm/config").await
    }

    /// Update model configuration with a partial payload
    pub async fn update_slm_config(&self, update: &SlmConfigUpdate) -> ClientResult<SlmConfig> {
        self.put("/api/slm/config", update).await
    }

    // ========== Internal HTTP helpers ==========

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EslmClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_endpoint_normalization() {
        let client = EslmClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn prompt_submission_body_shape() {
        let body = serde_json::to_value(PromptSubmission { prompt: "navbar" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "navbar" }));
    }
}
