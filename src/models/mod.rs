//! Clinic Data Model
//!
//! Every entity comes in two shapes:
//!
//! - a **form**, holding the raw text exactly as the user typed it
//! - a **request**, the JSON body sent to the backend
//!
//! Converting a form into a request is a pure function; all coercion
//! (list splitting, number parsing) happens there. Nothing here is cached
//! or tracked after it has been sent.

mod appointment;
mod chat;
mod invoice;
mod prescription;
mod questionnaire;

pub use appointment::{AppointmentForm, AppointmentRequest};
pub use chat::{ChatMessage, MessageList, NewMessage, DEFAULT_SENDER, PATIENT_ROOM};
pub use invoice::{InvoiceForm, InvoiceLineItem, InvoiceRequest};
pub use prescription::{PrescriptionForm, PrescriptionRequest};
pub use questionnaire::{QuestionnaireForm, QuestionnaireRequest};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server reply to a create operation.
///
/// Only `id` is interpreted; everything else the backend echoes back is
/// kept verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Created {
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Created {
    /// Identifier formatted for display.
    ///
    /// String ids are shown without quotes; a missing or null id shows as
    /// `unknown`.
    pub fn id_label(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => "unknown".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
