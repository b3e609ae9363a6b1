use async_trait::async_trait;
use coinwrap::core::errors::ExchangeError;
use coinwrap::core::kernel::RestClient;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory `RestClient` serving canned JSON bodies, keyed by
/// `endpoint?query` (or bare endpoint when there are no parameters).
#[derive(Clone, Default)]
pub struct MockRest {
    inner: Arc<MockRestInner>,
}

#[derive(Default)]
struct MockRestInner {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
}

impl MockRest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, key: &str, body: Value) -> Self {
        self.inner
            .responses
            .lock()
            .unwrap()
            .insert(key.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn key(endpoint: &str, query_params: &[(&str, &str)]) -> String {
        if query_params.is_empty() {
            endpoint.to_string()
        } else {
            let query = query_params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", endpoint, query)
        }
    }
}

#[async_trait]
impl RestClient for MockRest {
    async fn get(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        _authenticated: bool,
    ) -> Result<Value, ExchangeError> {
        let key = Self::key(endpoint, query_params);
        self.inner.calls.lock().unwrap().push(key.clone());

        self.inner
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| ExchangeError::NetworkError(format!("No canned response for '{}'", key)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
        authenticated: bool,
    ) -> Result<T, ExchangeError> {
        let value = self.get(endpoint, query_params, authenticated).await?;
        serde_json::from_value(value).map_err(|e| {
            ExchangeError::DeserializationError(format!("Failed to deserialize JSON: {}", e))
        })
    }
}
