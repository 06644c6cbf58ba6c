//! Account service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ApiRequest, ClientInner};
use crate::Result;

/// Service for account-level information.
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get API usage for the authenticated key.
    ///
    /// The payload shape is not fixed by the API, so it is returned as JSON.
    pub async fn usage(&self) -> Result<Value> {
        self.inner.dispatch(&ApiRequest::get("/account/usage")).await
    }
}
