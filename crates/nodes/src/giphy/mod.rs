//! `GiphyNode` — searches Giphy and publishes one random gif or the full list.
//!
//! One execution is a straight pipeline:
//! 1. Validate the `search_term` input (empty → warning, nothing written).
//! 2. Resolve the API key from the secret store.
//! 3. Fetch the search response, or the `giphy` fixture in test mode.
//! 4. Write the raw body to `output_json`, then project the `data` records
//!    into `gif` or `gif_list` depending on the mode.
//!
//! The node keeps no state between executions.

pub mod client;
pub mod config;
pub mod manifest;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::fixtures::BuiltinFixtures;
use crate::notice::TracingNotices;
use crate::random::ThreadRngIndex;
use crate::{
    ExecutableNode, ExecutionContext, FixtureProvider, GifSearchClient, IndexSource, NodeError,
    NoticeKind, NoticeSink, SecretProvider,
};

pub use client::HttpSearchClient;
pub use config::GiphyConfig;
pub use manifest::{manifest, NodeManifest};
pub use models::{
    extract_results, ExecutionOutputs, GifRecord, GiphySettings, Mode, OutputVisibility, RawResult,
};

/// Fixture name consulted in test mode.
pub const FIXTURE_NAME: &str = "giphy";

/// Input expected by [`ExecutableNode::execute`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiphyInput {
    #[serde(default)]
    pub search_term: String,
}

pub struct GiphyNode {
    settings: GiphySettings,
    secret_name: String,
    client: Arc<dyn GifSearchClient>,
    secrets: Arc<dyn SecretProvider>,
    fixtures: Arc<dyn FixtureProvider>,
    notices: Arc<dyn NoticeSink>,
    index: Arc<dyn IndexSource>,
}

impl GiphyNode {
    /// Create a node with default settings, builtin fixtures, tracing notices
    /// and a thread-RNG index source.
    pub fn new(client: Arc<dyn GifSearchClient>, secrets: Arc<dyn SecretProvider>) -> Self {
        Self {
            settings: GiphySettings::default(),
            secret_name: GiphyConfig::default().secret_name,
            client,
            secrets,
            fixtures: Arc::new(BuiltinFixtures),
            notices: Arc::new(TracingNotices),
            index: Arc::new(ThreadRngIndex),
        }
    }

    pub fn with_settings(mut self, settings: GiphySettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.settings.mode = mode;
        self
    }

    pub fn with_secret_name(mut self, name: impl Into<String>) -> Self {
        self.secret_name = name.into();
        self
    }

    pub fn with_fixtures(mut self, fixtures: Arc<dyn FixtureProvider>) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn with_notices(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    pub fn with_index_source(mut self, index: Arc<dyn IndexSource>) -> Self {
        self.index = index;
        self
    }

    pub fn settings(&self) -> &GiphySettings {
        &self.settings
    }

    /// The node's editor description.
    pub fn manifest() -> NodeManifest {
        manifest::manifest()
    }

    /// Output visibility after `setting` changed from `old` to `new`.
    ///
    /// Returns `None` for settings that don't affect visibility.
    pub fn setting_changed(setting: &str, _old: &str, new: &str) -> Option<OutputVisibility> {
        (setting == "mode").then(|| OutputVisibility::for_mode_value(new))
    }

    /// Run one search and return the output slots that were written.
    ///
    /// # Errors
    /// Secret resolution, transport, malformed-response and fixture failures
    /// propagate unchanged. An empty term or empty result set is not an error.
    #[instrument(
        skip(self, ctx),
        fields(execution_id = %ctx.execution_id, mode = %self.settings.mode, test_mode = ctx.test_mode)
    )]
    pub async fn run(
        &self,
        search_term: &str,
        ctx: &ExecutionContext,
    ) -> Result<ExecutionOutputs, NodeError> {
        let mut outputs = ExecutionOutputs::default();

        if search_term.is_empty() {
            if ctx.interactive {
                self.notices
                    .display_while_running("Search Term Required", NoticeKind::Warning);
            }
            debug!("empty search term, skipping");
            return Ok(outputs);
        }

        let api_key = self.secrets.get_secret(&self.secret_name)?;

        self.notices.display_while_running(
            &format!("Pulling GIFs for {search_term}"),
            NoticeKind::Info,
        );

        let body = if ctx.test_mode {
            self.fixtures.get_dummy_data(FIXTURE_NAME)?
        } else {
            self.client.search(&api_key, search_term).await?
        };

        let results = extract_results(&body)?;
        outputs.output_json = Some(body);

        if results.is_empty() {
            self.notices.display_while_running(
                &format!("No GIFs found for {search_term}"),
                NoticeKind::Info,
            );
            return Ok(outputs);
        }

        match self.settings.mode {
            Mode::RandomResult => {
                let i = self.index.pick(results.len());
                let raw = results.get(i).ok_or_else(|| {
                    NodeError::InvalidConfig(format!(
                        "index source returned {i} for {} results",
                        results.len()
                    ))
                })?;
                outputs.gif = Some(GifRecord::project(raw));
                info!(index = i, of = results.len(), "picked random gif");
            }
            Mode::AllResults => {
                let gifs: Vec<GifRecord> = results.iter().map(GifRecord::project).collect();
                info!(count = gifs.len(), "collected gifs");
                outputs.gif_list = Some(gifs);
            }
        }

        Ok(outputs)
    }
}

#[async_trait]
impl ExecutableNode for GiphyNode {
    async fn execute(&self, input: Value, ctx: &ExecutionContext) -> Result<Value, NodeError> {
        let input: GiphyInput = if input.is_null() {
            GiphyInput::default()
        } else {
            serde_json::from_value(input).map_err(|e| NodeError::InvalidConfig(e.to_string()))?
        };

        let outputs = self.run(&input.search_term, ctx).await?;
        serde_json::to_value(outputs).map_err(|e| NodeError::InvalidConfig(e.to_string()))
    }
}
