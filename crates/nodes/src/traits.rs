//! The `ExecutableNode` trait and the host ports a node is wired with.
//!
//! A node never reaches for global services. Everything it needs from the
//! surrounding runtime (secrets, dummy data, the status channel, randomness,
//! the outbound HTTP call) arrives through one of the traits below.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::NodeError;

/// Shared context passed to every node during execution.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// ID of the current execution run.
    pub execution_id: Uuid,
    /// The node runs inside a live, user-facing program run (as opposed to a
    /// non-interactive harness). Gates warnings aimed at the user.
    pub interactive: bool,
    /// Substitute dummy data for outbound network calls.
    pub test_mode: bool,
}

impl ExecutionContext {
    /// Context for a live, interactive run.
    pub fn live() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            interactive: true,
            test_mode: false,
        }
    }

    /// Context for a test-mode (dry) run.
    pub fn test_mode() -> Self {
        Self {
            test_mode: true,
            ..Self::live()
        }
    }

    /// Same context, but not attached to a user-facing run.
    pub fn non_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }
}

/// The core node trait.
#[async_trait]
pub trait ExecutableNode: Send + Sync {
    /// Execute the node with its JSON `input` and return the JSON object of
    /// output slots it wrote.
    async fn execute(&self, input: Value, ctx: &ExecutionContext) -> Result<Value, NodeError>;
}

// ---------------------------------------------------------------------------
// Host ports
// ---------------------------------------------------------------------------

/// Resolves secrets by name. Called once per execution; values are never cached.
pub trait SecretProvider: Send + Sync {
    fn get_secret(&self, name: &str) -> Result<String, NodeError>;
}

/// Secrets scoped to a single workflow, already decrypted by the host.
impl SecretProvider for HashMap<String, String> {
    fn get_secret(&self, name: &str) -> Result<String, NodeError> {
        self.get(name).cloned().ok_or_else(|| NodeError::Secret {
            name: name.to_owned(),
            message: "not present in workflow secrets".into(),
        })
    }
}

/// Supplies canned payloads used in place of network responses in test mode.
pub trait FixtureProvider: Send + Sync {
    fn get_dummy_data(&self, name: &str) -> Result<Value, NodeError>;
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Fire-and-forget status channel shown to the user while a node runs.
pub trait NoticeSink: Send + Sync {
    fn display_while_running(&self, message: &str, kind: NoticeKind);
}

/// Source of uniformly distributed indices.
pub trait IndexSource: Send + Sync {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}

/// Outbound gif search. Returns the parsed JSON body untouched.
#[async_trait]
pub trait GifSearchClient: Send + Sync {
    async fn search(&self, api_key: &str, query: &str) -> Result<Value, NodeError>;
}
