//! # NutriVibe
//!
//! Client for the NutriVibe nutrition-clinic backend.
//!
//! ## Features
//!
//! - **Appointments**: book a visit from the patient dashboard form
//! - **Live chat**: post to and read from a chat room
//! - **Prescriptions and invoices**: admin forms with comma-separated items
//! - **Intake questionnaire**: free-text answers passed through verbatim
//!
//! ## Modules
//!
//! - [`models`]: Form and request types for every entity
//! - [`parse`]: Coercion of free-text fields (item lists, amounts)
//! - [`client`]: HTTP client for the clinic REST API
//! - [`chat`]: Chat session for one room
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutrivibe::{ClientConfig, ClinicApi, ClinicClient, PrescriptionForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClinicClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//!     let form = PrescriptionForm {
//!         patient_email: "ana@example.com".into(),
//!         patient_name: "Ana Ruiz".into(),
//!         items: "Vitamin D, Omega-3".into(),
//!         instructions: "One of each with breakfast".into(),
//!     };
//!
//!     let created = client.create_prescription(&form.into()).await?;
//!     println!("Prescription saved: {}", created.id_label());
//!
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod models;
pub mod parse;

#[cfg(test)]
mod test_support;

pub use chat::ChatSession;

pub use client::{ClientConfig, ClinicApi, ClinicClient, ClinicError, ClinicResult};

pub use models::{
    AppointmentForm, AppointmentRequest, ChatMessage, Created, InvoiceForm, InvoiceLineItem,
    InvoiceRequest, NewMessage, PrescriptionForm, PrescriptionRequest, QuestionnaireForm,
    QuestionnaireRequest, PATIENT_ROOM,
};

pub use config::{BackendConfig, ChatConfig, Config, ConfigError, LoggingConfig};
