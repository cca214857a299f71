pub mod log;
pub mod outbox;

pub use self::log::LogSubmitter;
pub use self::outbox::OutboxSubmitter;
