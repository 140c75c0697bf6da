//! Trait abstraction for the submit client to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

use super::client::SubmitResponse;

/// Trait for form submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClient: Send + Sync {
    /// Send the serialized form to the signup endpoint
    async fn submit(&self, payload: Map<String, Value>) -> Result<SubmitResponse>;
}
