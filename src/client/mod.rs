//! Clinic API Client
//!
//! Translates clinic forms into HTTP calls against the backend:
//!
//! | Operation | Request |
//! |---|---|
//! | create appointment | `POST /api/appointments` |
//! | post message | `POST /api/messages` |
//! | list messages | `GET /api/messages?room=...` |
//! | create prescription | `POST /api/prescriptions` |
//! | create invoice | `POST /api/invoices` |
//! | submit questionnaire | `POST /api/questionnaires` |
//!
//! Every call is independent: no retry, no caching, no idempotency key.

mod error;
mod http;

pub use error::{ClinicError, ClinicResult};
pub use http::{ClientConfig, ClinicClient};

use async_trait::async_trait;

use crate::models::{
    AppointmentRequest, ChatMessage, Created, InvoiceRequest, NewMessage, PrescriptionRequest,
    QuestionnaireRequest,
};

/// Operations offered by the clinic backend
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// Book an appointment
    async fn create_appointment(&self, request: &AppointmentRequest) -> ClinicResult<Created>;

    /// Post a chat message.
    ///
    /// Returns `Ok(None)` without touching the network when the content is
    /// empty.
    async fn post_message(&self, message: &NewMessage) -> ClinicResult<Option<Created>>;

    /// Messages of a room, in the order the backend returns them
    async fn list_messages(&self, room: &str) -> ClinicResult<Vec<ChatMessage>>;

    /// Save a prescription
    async fn create_prescription(&self, request: &PrescriptionRequest) -> ClinicResult<Created>;

    /// Create an invoice
    async fn create_invoice(&self, request: &InvoiceRequest) -> ClinicResult<Created>;

    /// Submit an intake questionnaire
    async fn create_questionnaire(&self, request: &QuestionnaireRequest)
        -> ClinicResult<Created>;
}
