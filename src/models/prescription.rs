use crate::parse::parse_item_list;
use serde::{Deserialize, Serialize};

/// Prescription form from the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionForm {
    pub patient_email: String,
    pub patient_name: String,
    /// Comma-separated list of items
    pub items: String,
    pub instructions: String,
}

/// Body of `POST /api/prescriptions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionRequest {
    pub patient_email: String,
    pub patient_name: String,
    pub items: Vec<String>,
    pub instructions: String,
}

impl From<PrescriptionForm> for PrescriptionRequest {
    fn from(form: PrescriptionForm) -> Self {
        Self {
            items: parse_item_list(&form.items),
            patient_email: form.patient_email,
            patient_name: form.patient_name,
            instructions: form.instructions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_split_and_cleaned() {
        let form = PrescriptionForm {
            patient_email: "ana@example.com".into(),
            patient_name: "Ana Ruiz".into(),
            items: "Vitamin D, , Omega-3".into(),
            instructions: "One of each with breakfast".into(),
        };

        let request = PrescriptionRequest::from(form);
        assert_eq!(request.items, vec!["Vitamin D", "Omega-3"]);
        assert_eq!(request.instructions, "One of each with breakfast");
    }

    #[test]
    fn test_no_items() {
        let request = PrescriptionRequest::from(PrescriptionForm::default());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["items"], serde_json::json!([]));
    }
}
