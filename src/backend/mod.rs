//! Submit client module for JSON-over-HTTP communication

mod client;
mod traits;

pub use client::{HttpSubmitClient, SubmitError, SubmitResponse, SubmitResult};
pub use traits::SubmitClient;

#[cfg(test)]
pub use traits::MockSubmitClient;
