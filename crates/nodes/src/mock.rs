//! Test doubles for the host ports.
//!
//! Useful in unit and integration tests where the real network, secret store
//! or notice channel is either unavailable or irrelevant.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{GifSearchClient, IndexSource, NodeError, NoticeKind, NoticeSink};

/// Behaviour injected into `MockSearchClient` at construction time.
pub enum MockBehaviour {
    /// Return a specific JSON body.
    ReturnValue(Value),
    /// Fail with the given error.
    Fail(NodeError),
}

/// One recorded call to [`MockSearchClient::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub api_key: String,
    pub query: String,
}

/// A search client that records every call it receives and returns a
/// programmer-specified result.
pub struct MockSearchClient {
    pub behaviour: MockBehaviour,
    /// All calls seen by this client (in call order).
    pub calls: Arc<Mutex<Vec<SearchCall>>>,
}

impl MockSearchClient {
    /// Create a mock that always returns `body`.
    pub fn returning(body: Value) -> Self {
        Self {
            behaviour: MockBehaviour::ReturnValue(body),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with `err`.
    pub fn failing(err: NodeError) -> Self {
        Self {
            behaviour: MockBehaviour::Fail(err),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `search` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GifSearchClient for MockSearchClient {
    async fn search(&self, api_key: &str, query: &str) -> Result<Value, NodeError> {
        self.calls.lock().unwrap().push(SearchCall {
            api_key: api_key.to_owned(),
            query: query.to_owned(),
        });

        match &self.behaviour {
            MockBehaviour::ReturnValue(v) => Ok(v.clone()),
            MockBehaviour::Fail(e) => Err(e.clone()),
        }
    }
}

/// Collects every notice so tests can assert on them.
#[derive(Default)]
pub struct RecordingNotices {
    pub notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<(NoticeKind, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m)
            .collect()
    }
}

impl NoticeSink for RecordingNotices {
    fn display_while_running(&self, message: &str, kind: NoticeKind) {
        self.notices.lock().unwrap().push((kind, message.to_owned()));
    }
}

/// Always picks the same index (clamped to the last valid one).
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
