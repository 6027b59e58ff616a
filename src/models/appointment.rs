use serde::{Deserialize, Serialize};

/// Appointment booking form as filled in on the patient dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

/// Body of `POST /api/appointments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub patient_email: String,
    pub patient_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl From<AppointmentForm> for AppointmentRequest {
    fn from(form: AppointmentForm) -> Self {
        Self {
            patient_email: form.email,
            patient_name: form.name,
            date: form.date,
            time: form.time,
            reason: form.reason,
        }
    }
}
