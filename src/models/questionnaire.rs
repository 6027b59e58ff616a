use serde::{Deserialize, Serialize};

/// Nutrition intake questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionnaireForm {
    pub email: String,
    pub goals: String,
    pub allergies: String,
    pub dietary_preferences: String,
    pub notes: String,
}

/// Body of `POST /api/questionnaires`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireRequest {
    pub patient_email: String,
    pub goals: String,
    pub allergies: String,
    pub dietary_preferences: String,
    pub notes: String,
}

impl From<QuestionnaireForm> for QuestionnaireRequest {
    fn from(form: QuestionnaireForm) -> Self {
        Self {
            patient_email: form.email,
            goals: form.goals,
            allergies: form.allergies,
            dietary_preferences: form.dietary_preferences,
            notes: form.notes,
        }
    }
}
