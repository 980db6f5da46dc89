//! Test-mode dummy data providers.

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::{FixtureProvider, NodeError};

const GIPHY_FIXTURE: &str = include_str!("../fixtures/giphy.json");

/// Dummy payloads compiled into the crate.
#[derive(Debug, Clone, Default)]
pub struct BuiltinFixtures;

impl FixtureProvider for BuiltinFixtures {
    fn get_dummy_data(&self, name: &str) -> Result<Value, NodeError> {
        let raw = match name {
            "giphy" => GIPHY_FIXTURE,
            other => return Err(NodeError::Fixture(format!("no builtin fixture named '{other}'"))),
        };
        serde_json::from_str(raw).map_err(|e| NodeError::Fixture(format!("{name}: {e}")))
    }
}

/// Reads `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirFixtures {
    dir: PathBuf,
}

impl DirFixtures {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FixtureProvider for DirFixtures {
    fn get_dummy_data(&self, name: &str) -> Result<Value, NodeError> {
        let path = self.dir.join(format!("{name}.json"));
        debug!(path = %path.display(), "loading fixture");

        let content = std::fs::read_to_string(&path)
            .map_err(|e| NodeError::Fixture(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| NodeError::Fixture(format!("{}: {e}", path.display())))
    }
}
