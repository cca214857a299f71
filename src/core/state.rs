//! # Application State
//!
//! Core page state for the showroom. Domain logic only, no TUI-specific
//! types. Presentation state (scroll offsets, focus, layout) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── submitter: Arc<dyn ContactSubmitter>  // where enquiries go
//! ├── catalog: GroupCatalog                 // media items per group
//! ├── showcase: ViewState                   // active group / index / play
//! ├── contact: ContactForm                  // fields, errors, submitting
//! ├── submit_timeout: Duration              // upper bound per submission
//! └── status_message: String                // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::catalog::GroupCatalog;
use crate::core::config::DEFAULT_SUBMIT_TIMEOUT_SECS;
use crate::core::contact::ContactForm;
use crate::core::showcase::ViewState;
use crate::submission::ContactSubmitter;

pub struct App {
    pub submitter: Arc<dyn ContactSubmitter>,
    pub catalog: GroupCatalog,
    pub showcase: ViewState,
    pub contact: ContactForm,
    pub submit_timeout: Duration,
    pub status_message: String,
}

impl App {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, catalog: GroupCatalog) -> Self {
        let showcase = ViewState::new(catalog.first_group());
        Self {
            submitter,
            catalog,
            showcase,
            contact: ContactForm::new(),
            submit_timeout: Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
            status_message: String::from("Tab to move focus · Esc to leave"),
        }
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// Number of controls on the strip for the active group.
    pub fn control_count(&self) -> usize {
        self.showcase.current_items(&self.catalog).len()
    }
}
