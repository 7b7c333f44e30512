//! Handler implementations

pub mod destination;
pub mod journal;

pub use destination::Destination;
pub use journal::JournalHandler;
