//! Lead intake service
//!
//! Validates a form submission, enforces consent and writes one lead row.
//! Validation is ordered and stops at the first failure:
//! 1. consent flag
//! 2. required personal fields
//! 3. consent text against the canonical disclosure (only when configured)

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{BrandConfig, ConsentConfig, get_config};
use crate::errors::{LeadError, Result};
use crate::storage::{Lead, LeadStore, NewLead};
use crate::utils::json_value::{
    deserialize_lenient_text, deserialize_required_text, deserialize_truthy,
};

pub const CONSENT_NOT_GIVEN: &str = "Consent checkbox not checked.";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields.";
pub const CONSENT_TEXT_MISMATCH: &str = "Consent text does not match the current disclosure.";

// ============ Request DTO ============

/// Body of `POST /api/lead`, as sent by the landing page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default, deserialize_with = "deserialize_required_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_required_text")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub consent_checked: bool,
    /// Disclosure text shown to the visitor
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub consent_text: Option<String>,
    /// Client-side ISO timestamp
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub page_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub user_agent: Option<String>,
}

impl LeadSubmission {
    /// Parse a raw request body.
    ///
    /// Only named fields of a JSON object are read. Falsy bodies (`null`,
    /// `false`, `0`, `""`) and non-object bodies are empty submissions. A
    /// repeated key keeps its last value.
    pub fn from_json_bytes(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| LeadError::malformed_payload(e.to_string()))?;

        match value {
            Value::Object(fields) => {
                serde_json::from_value(Value::Object(fields))
                    .map_err(|e| LeadError::malformed_payload(e.to_string()))
            }
            _ => Ok(Self::default()),
        }
    }

    fn required_fields(&self) -> [&Option<String>; 5] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.zip,
        ]
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// Consent and required-field checks, in that order.
///
/// No format validation: any non-empty value passes.
pub fn validate_submission(submission: &LeadSubmission) -> Result<()> {
    if !submission.consent_checked {
        return Err(LeadError::validation(CONSENT_NOT_GIVEN));
    }

    if submission.required_fields().into_iter().any(is_blank) {
        return Err(LeadError::validation(MISSING_REQUIRED_FIELDS));
    }

    Ok(())
}

// ============ Service ============

pub struct LeadService {
    storage: Arc<LeadStore>,
    brand: BrandConfig,
    consent: ConsentConfig,
}

impl LeadService {
    pub fn new(storage: Arc<LeadStore>, brand: BrandConfig, consent: ConsentConfig) -> Self {
        Self {
            storage,
            brand,
            consent,
        }
    }

    /// Build from the global configuration
    pub fn from_config(storage: Arc<LeadStore>) -> Self {
        let config = get_config();
        Self::new(storage, config.brand.clone(), config.consent.clone())
    }

    /// Compare the submitted disclosure with the configured canonical text.
    ///
    /// Mismatches are logged; they only reject the submission when
    /// `enforce_canonical` is on.
    pub fn check_consent_text(&self, submission: &LeadSubmission) -> Result<()> {
        let Some(canonical) = self.consent.canonical_text.as_deref() else {
            return Ok(());
        };

        let submitted = submission.consent_text.as_deref().unwrap_or_default();
        if submitted.trim() == canonical.trim() {
            return Ok(());
        }

        if self.consent.enforce_canonical {
            debug!("Rejecting lead: consent text differs from canonical disclosure");
            return Err(LeadError::validation(CONSENT_TEXT_MISMATCH));
        }

        warn!(
            submitted_len = submitted.len(),
            canonical_len = canonical.len(),
            "Consent text differs from canonical disclosure; storing client text as submitted"
        );
        Ok(())
    }

    /// Turn a validated submission into a row. Brand and domain always come
    /// from configuration.
    pub fn build_new_lead(&self, submission: LeadSubmission, ip: String) -> NewLead {
        NewLead {
            first_name: submission.first_name.unwrap_or_default(),
            last_name: submission.last_name.unwrap_or_default(),
            email: submission.email.unwrap_or_default(),
            phone: submission.phone.unwrap_or_default(),
            zip: submission.zip.unwrap_or_default(),
            ip,
            user_agent: submission.user_agent,
            page_url: submission.page_url,
            consent_text: submission.consent_text.unwrap_or_default(),
            brand: self.brand.name.clone(),
            domain: self.brand.domain.clone(),
            submitted_at: submission.timestamp,
        }
    }

    /// Validate and store one submission.
    ///
    /// Nothing is written when validation fails.
    pub async fn submit(&self, submission: LeadSubmission, ip: String) -> Result<Lead> {
        if let Err(e) = validate_submission(&submission) {
            debug!("Rejecting lead: {}", e.message());
            return Err(e);
        }
        self.check_consent_text(&submission)?;

        let lead = self.storage.insert(self.build_new_lead(submission, ip)).await?;

        info!(lead_id = lead.id, ip = %lead.ip.as_deref().unwrap_or_default(), "Lead stored");
        Ok(lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> LeadSubmission {
        LeadSubmission {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            phone: Some("555-1234".to_string()),
            zip: Some("90210".to_string()),
            consent_checked: true,
            consent_text: Some("I agree".to_string()),
            timestamp: Some("2024-01-01T00:00:00Z".to_string()),
            page_url: None,
            user_agent: None,
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission(&valid_submission()).is_ok());
    }

    #[test]
    fn test_consent_checked_first() {
        // 同时缺字段时，先报告未勾选授权
        let submission = LeadSubmission {
            consent_checked: false,
            first_name: None,
            ..valid_submission()
        };
        let err = validate_submission(&submission).unwrap_err();
        assert_eq!(err.message(), CONSENT_NOT_GIVEN);
    }

    #[test]
    fn test_each_required_field() {
        let clear: [fn(&mut LeadSubmission); 5] = [
            |s| s.first_name = None,
            |s| s.last_name = Some(String::new()),
            |s| s.email = None,
            |s| s.phone = Some(String::new()),
            |s| s.zip = None,
        ];
        for clear_field in clear {
            let mut submission = valid_submission();
            clear_field(&mut submission);
            let err = validate_submission(&submission).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.message(), MISSING_REQUIRED_FIELDS);
        }
    }

    #[test]
    fn test_no_format_validation() {
        let submission = LeadSubmission {
            email: Some("not an email".to_string()),
            phone: Some("x".to_string()),
            zip: Some(" ".to_string()),
            ..valid_submission()
        };
        assert!(validate_submission(&submission).is_ok());
    }

    #[test]
    fn test_parse_null_body() {
        let submission = LeadSubmission::from_json_bytes(b"null").unwrap();
        assert!(!submission.consent_checked);
        assert!(submission.first_name.is_none());
    }

    #[test]
    fn test_parse_camel_case_and_lenient_types() {
        let body = br#"{"firstName":"Jane","lastName":"Doe","email":"jane@x.com",
            "phone":5551234,"zip":90210,"consentChecked":"on","timestamp":"2024-01-01T00:00:00Z"}"#;
        let submission = LeadSubmission::from_json_bytes(body).unwrap();
        assert!(submission.consent_checked);
        assert_eq!(submission.zip.as_deref(), Some("90210"));
        assert_eq!(submission.phone.as_deref(), Some("5551234"));
        assert!(submission.consent_text.is_none());
    }

    #[test]
    fn test_parse_non_object_bodies_are_empty() {
        let array = br#"["Jane","Doe","jane@x.com","555-1234","90210",true]"#;
        let bodies: [&[u8]; 7] = [array, b"false", b"0", b"\"\"", b"true", b"42", b"\"text\""];
        for body in bodies {
            let submission = LeadSubmission::from_json_bytes(body).unwrap();
            assert!(!submission.consent_checked);
            assert!(submission.first_name.is_none());
            assert_eq!(
                validate_submission(&submission).unwrap_err().message(),
                CONSENT_NOT_GIVEN
            );
        }
    }

    #[test]
    fn test_parse_duplicate_key_keeps_last() {
        let body = br#"{"firstName":"A","firstName":"Jane","consentChecked":true}"#;
        let submission = LeadSubmission::from_json_bytes(body).unwrap();
        assert_eq!(submission.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn test_falsy_required_values_are_missing() {
        let body = br#"{"firstName":false,"lastName":"Doe","email":"jane@x.com",
            "phone":"555-1234","zip":0,"consentChecked":true}"#;
        let submission = LeadSubmission::from_json_bytes(body).unwrap();
        assert!(submission.first_name.is_none());
        assert!(submission.zip.is_none());
        assert_eq!(
            validate_submission(&submission).unwrap_err().message(),
            MISSING_REQUIRED_FIELDS
        );
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = LeadSubmission::from_json_bytes(b"{not json").unwrap_err();
        assert!(matches!(err, LeadError::MalformedPayload(_)));
    }
}
