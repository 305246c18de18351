//! Submission snapshot

use super::forms::{ContactForm, FieldId};
use crate::validation::{Average, BandThresholds, RatingTriple, SeverityBand};
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// Read-only snapshot of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub id: Uuid,
    pub submitted_at: DateTime<Local>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub ratings: RatingTriple,
    pub average: Average,
    pub band: SeverityBand,
}

impl SubmissionResult {
    /// Snapshot the trimmed values of `form`.
    ///
    /// Callers are expected to have validated the form first.
    pub fn from_form(form: &ContactForm, thresholds: &BandThresholds) -> Self {
        let ratings = form.ratings();
        let average = ratings.average();
        let trimmed = |id: FieldId| form.text(id).trim().to_string();

        Self {
            id: Uuid::new_v4(),
            submitted_at: Local::now(),
            name: trimmed(FieldId::Name),
            surname: trimmed(FieldId::Surname),
            email: trimmed(FieldId::Email),
            phone: trimmed(FieldId::Phone),
            address: trimmed(FieldId::Address),
            ratings,
            average,
            band: thresholds.classify(average),
        }
    }

    /// Labelled text values in display order
    pub fn text_values(&self) -> [(&'static str, &str); 5] {
        [
            (FieldId::Name.label(), self.name.as_str()),
            (FieldId::Surname.label(), self.surname.as_str()),
            (FieldId::Email.label(), self.email.as_str()),
            (FieldId::Phone.label(), self.phone.as_str()),
            (FieldId::Address.label(), self.address.as_str()),
        ]
    }

    /// "Name Surname: 7.0"
    pub fn headline(&self) -> String {
        format!("{} {}: {}", self.name, self.surname, self.average)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
