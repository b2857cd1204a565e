// Application layer - validation and use cases over the in-memory ledger

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
