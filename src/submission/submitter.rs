use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};

use crate::core::contact::ContactFields;

/// Errors a submitter can report. All of them leave the form intact.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The receiving side refused the enquiry.
    Rejected(String),
    /// No answer within the allotted time.
    Timeout(Duration),
    /// Local I/O failed (e.g. the outbox file could not be written).
    Io(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected(msg) => write!(f, "submission rejected: {msg}"),
            SubmitError::Timeout(after) => {
                write!(f, "submission timed out after {}s", after.as_secs_f32())
            }
            SubmitError::Io(msg) => write!(f, "submission I/O error: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Where validated contact enquiries go.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Returns the name of the submitter, for logs.
    fn name(&self) -> &str;

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

/// Run `submitter` with an upper bound on how long the form stays locked.
pub async fn submit_with_timeout(
    submitter: &dyn ContactSubmitter,
    fields: &ContactFields,
    timeout: Duration,
) -> Result<(), SubmitError> {
    match tokio::time::timeout(timeout, submitter.submit(fields)).await {
        Ok(Ok(())) => {
            info!("Contact enquiry delivered via {}", submitter.name());
            Ok(())
        }
        Ok(Err(e)) => {
            warn!("Contact submission via {} failed: {}", submitter.name(), e);
            Err(e)
        }
        Err(_) => {
            warn!(
                "Contact submission via {} timed out after {:?}",
                submitter.name(),
                timeout
            );
            Err(SubmitError::Timeout(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{HangingSubmitter, ScriptedSubmitter};

    fn fields() -> ContactFields {
        ContactFields {
            name: "A".into(),
            email: "a@b.co".into(),
            company: String::new(),
            message: "hi".into(),
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let submitter = ScriptedSubmitter::succeeding();
        let result = submit_with_timeout(&submitter, &fields(), Duration::from_secs(1)).await;
        assert!(result.is_ok());
        assert_eq!(submitter.received(), vec![fields()]);
    }

    #[tokio::test]
    async fn test_rejection_passes_through() {
        let submitter = ScriptedSubmitter::failing(SubmitError::Rejected("nope".into()));
        let result = submit_with_timeout(&submitter, &fields(), Duration::from_secs(1)).await;
        assert_eq!(result, Err(SubmitError::Rejected("nope".into())));
    }

    #[tokio::test]
    async fn test_hung_submitter_times_out() {
        let timeout = Duration::from_millis(50);
        let result = submit_with_timeout(&HangingSubmitter, &fields(), timeout).await;
        assert_eq!(result, Err(SubmitError::Timeout(timeout)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SubmitError::Timeout(Duration::from_secs(2)).to_string(),
            "submission timed out after 2s"
        );
        assert_eq!(
            SubmitError::Io("disk full".into()).to_string(),
            "submission I/O error: disk full"
        );
    }
}
