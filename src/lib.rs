//! Showroom library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod submission;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where contact enquiries are delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SubmitterKind {
    /// Write the enquiry to the log and report success
    #[default]
    Log,
    /// Append the enquiry as a JSON line to the outbox file
    Outbox,
}
