//! Appends each enquiry as one JSON line to a local file. Someone (or a
//! cron job) picks the file up later; nothing leaves the machine here.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::core::contact::ContactFields;
use crate::submission::{ContactSubmitter, SubmitError};

#[derive(Serialize)]
struct OutboxEntry<'a> {
    id: String,
    received_at: i64,
    #[serde(flatten)]
    fields: &'a ContactFields,
}

pub struct OutboxSubmitter {
    path: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactSubmitter for OutboxSubmitter {
    fn name(&self) -> &str {
        "outbox"
    }

    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        let entry = OutboxEntry {
            id: uuid::Uuid::new_v4().to_string(),
            received_at: Utc::now().timestamp(),
            fields,
        };
        let mut line =
            serde_json::to_string(&entry).map_err(|e| SubmitError::Io(e.to_string()))?;
        line.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SubmitError::Io(e.to_string()))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| SubmitError::Io(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| SubmitError::Io(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| SubmitError::Io(e.to_string()))?;

        debug!("Appended enquiry {} to {}", entry.id, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_outbox() -> PathBuf {
        std::env::temp_dir()
            .join(format!("showroom-test-{}", uuid::Uuid::new_v4()))
            .join("outbox.jsonl")
    }

    #[tokio::test]
    async fn test_appends_one_line_per_enquiry() {
        let path = temp_outbox();
        let submitter = OutboxSubmitter::new(path.clone());
        let fields = ContactFields {
            name: "A".into(),
            email: "a@b.co".into(),
            company: "Acme".into(),
            message: "hi".into(),
        };

        submitter.submit(&fields).await.unwrap();
        submitter.submit(&fields).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["email"], "a@b.co");
        assert_eq!(first["company"], "Acme");
        assert!(first["id"].is_string());
        assert_ne!(first["id"], serde_json::from_str::<serde_json::Value>(lines[1]).unwrap()["id"]);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn test_unwritable_path_is_io_error() {
        // A directory can't be opened for appending.
        let dir = std::env::temp_dir();
        let submitter = OutboxSubmitter::new(dir);
        let result = submitter.submit(&ContactFields::default()).await;
        assert!(matches!(result, Err(SubmitError::Io(_))));
    }
}
