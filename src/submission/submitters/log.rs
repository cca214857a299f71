use async_trait::async_trait;
use log::info;

use crate::core::contact::ContactFields;
use crate::submission::{ContactSubmitter, SubmitError};

/// Default submitter: records the enquiry in the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitter;

#[async_trait]
impl ContactSubmitter for LogSubmitter {
    fn name(&self) -> &str {
        "log"
    }

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        info!(
            "Form submitted: name={:?} email={:?} company={:?} message_len={}",
            fields.name,
            fields.email,
            fields.company,
            fields.message.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_submitter_always_succeeds() {
        let result = tokio_test::block_on(LogSubmitter.submit(&ContactFields::default()));
        assert!(result.is_ok());
        assert_eq!(LogSubmitter.name(), "log");
    }
}
