pub mod entities;

pub use entities::{EmailJob, EmailJobKind, EmailRecipient};
