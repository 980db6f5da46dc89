//! `nodes` crate — the `ExecutableNode` trait, host ports, and the Giphy node.
//!
//! A host wires a node with its ports (secret store, fixture provider, notice
//! channel, index source, search client) and dispatches execution through
//! [`ExecutableNode`] or the node's typed entry point.

pub mod error;
pub mod traits;
pub mod fixtures;
pub mod notice;
pub mod random;
pub mod secrets;
pub mod giphy;
pub mod mock;

pub use error::NodeError;
pub use traits::{
    ExecutableNode, ExecutionContext, FixtureProvider, GifSearchClient, IndexSource, NoticeKind,
    NoticeSink, SecretProvider,
};
pub use giphy::{GifRecord, GiphyNode};
