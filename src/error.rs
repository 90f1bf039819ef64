use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Failure while splitting a text unit into inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("no closing delimiter '{delimiter}' for the one at byte {offset} in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        /// Byte offset of the last unpaired occurrence within `text`.
        offset: usize,
        text: String,
    },
}

/// A node assembled from loose parts does not have a valid leaf or parent shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("parent node requires a tag")]
    MissingTag,
    #[error("leaf node requires a value")]
    MissingValue,
    #[error("parent node <{0}> requires a children sequence")]
    MissingChildren(String),
    #[error("node cannot have both a value and children")]
    ValueWithChildren,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("block {block}: {source}")]
    Inline {
        block: usize,
        #[source]
        source: InlineError,
    },

    #[error("no level-one heading found to use as page title")]
    MissingTitle,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
