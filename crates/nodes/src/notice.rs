//! Notice channel that forwards user-facing messages to `tracing`.

use tracing::{info, warn};

use crate::{NoticeKind, NoticeSink};

/// Emits each notice as a log event under the `notice` target.
#[derive(Debug, Clone, Default)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn display_while_running(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Info => info!(target: "notice", "{message}"),
            NoticeKind::Warning => warn!(target: "notice", "{message}"),
        }
    }
}
