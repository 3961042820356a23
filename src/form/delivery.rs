use gloo_timers::future::TimeoutFuture;
use log::info;

use super::controller::SubmissionError;
use super::validation::FormValues;
use crate::config;

/// Which lead magnet a form belongs to; decides the confirmation copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Audit,
    Guide,
}

impl LeadKind {
    pub fn confirmation(&self) -> &'static str {
        match self {
            LeadKind::Audit => "Thank you! Your free checklist will be sent to your email shortly.",
            LeadKind::Guide => "Thank you! Your free guide will be sent to your email shortly.",
        }
    }
}

/// Stand-in for a real lead endpoint: waits, logs the values and confirms
/// with a browser alert. Nothing leaves the page.
pub async fn deliver_lead(kind: LeadKind, values: FormValues) -> Result<(), SubmissionError> {
    TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;

    let payload = serde_json::to_string(&values)?;
    info!("Form submitted ({:?}): {}", kind, payload);

    let window = web_sys::window().ok_or(SubmissionError::NoWindow)?;
    window.alert_with_message(kind.confirmation())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_lead_magnet_has_its_own_confirmation() {
        assert!(LeadKind::Audit.confirmation().contains("checklist"));
        assert!(LeadKind::Guide.confirmation().contains("guide"));
    }

    #[test]
    fn values_serialize_with_lowercase_keys() {
        use crate::form::validation::Field;
        let values: FormValues = [
            (Field::Name, "Jane".to_string()),
            (Field::Email, "jane@example.com".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"{"name":"Jane","email":"jane@example.com"}"#
        );
    }
}
