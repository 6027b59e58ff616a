//! HTTP implementation of [`ClinicApi`] over reqwest.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{ClinicApi, ClinicError, ClinicResult};
use crate::models::{
    AppointmentRequest, ChatMessage, Created, InvoiceRequest, MessageList, NewMessage,
    PrescriptionRequest, QuestionnaireRequest,
};

const APPOINTMENTS_PATH: &str = "/api/appointments";
const MESSAGES_PATH: &str = "/api/messages";
const PRESCRIPTIONS_PATH: &str = "/api/prescriptions";
const INVOICES_PATH: &str = "/api/invoices";
const QUESTIONNAIRES_PATH: &str = "/api/questionnaires";

/// Configuration for the clinic client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g., "http://localhost:8000"), without trailing slash
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Clinic backend REST client
pub struct ClinicClient {
    client: Client,
    config: ClientConfig,
}

impl ClinicClient {
    /// Create a client for the given backend
    pub fn new(mut config: ClientConfig) -> ClinicResult<Self> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn post_json<T>(&self, path: &str, body: &T) -> ClinicResult<Created>
    where
        T: Serialize + Sync + ?Sized,
    {
        tracing::debug!(method = "POST", path, "Sending clinic request");

        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ClinicError::from_send)?;

        read_json(path, response).await
    }
}

/// Check the status and decode a JSON body
async fn read_json<R: DeserializeOwned>(path: &str, response: Response) -> ClinicResult<R> {
    let status = response.status();
    let text = response.text().await.map_err(ClinicError::from_send)?;

    if !status.is_success() {
        tracing::warn!(path, status = status.as_u16(), "Clinic backend rejected request");
        return Err(ClinicError::Api {
            status: status.as_u16(),
            message: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| ClinicError::Decode(e.to_string()))
}

#[async_trait]
impl ClinicApi for ClinicClient {
    async fn create_appointment(&self, request: &AppointmentRequest) -> ClinicResult<Created> {
        let created = self.post_json(APPOINTMENTS_PATH, request).await?;
        tracing::info!(id = %created.id_label(), "Appointment created");
        Ok(created)
    }

    async fn post_message(&self, message: &NewMessage) -> ClinicResult<Option<Created>> {
        if message.is_empty() {
            tracing::debug!(room = %message.room, "Skipping empty chat message");
            return Ok(None);
        }

        self.post_json(MESSAGES_PATH, message).await.map(Some)
    }

    async fn list_messages(&self, room: &str) -> ClinicResult<Vec<ChatMessage>> {
        tracing::debug!(method = "GET", path = MESSAGES_PATH, room, "Sending clinic request");

        let response = self
            .client
            .get(self.url(MESSAGES_PATH))
            .query(&[("room", room)])
            .send()
            .await
            .map_err(ClinicError::from_send)?;

        let list: MessageList = read_json(MESSAGES_PATH, response).await?;
        Ok(list.items)
    }

    async fn create_prescription(&self, request: &PrescriptionRequest) -> ClinicResult<Created> {
        let created = self.post_json(PRESCRIPTIONS_PATH, request).await?;
        tracing::info!(id = %created.id_label(), items = request.items.len(), "Prescription saved");
        Ok(created)
    }

    async fn create_invoice(&self, request: &InvoiceRequest) -> ClinicResult<Created> {
        let created = self.post_json(INVOICES_PATH, request).await?;
        tracing::info!(id = %created.id_label(), total = request.total, "Invoice created");
        Ok(created)
    }

    async fn create_questionnaire(
        &self,
        request: &QuestionnaireRequest,
    ) -> ClinicResult<Created> {
        self.post_json(QUESTIONNAIRES_PATH, request).await
    }
}
