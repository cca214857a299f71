pub mod submitter;
pub mod submitters;

pub use submitter::{ContactSubmitter, SubmitError, submit_with_timeout};
pub use submitters::{LogSubmitter, OutboxSubmitter};
