use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::dom::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("node {0:?} does not exist in this document")]
    UnknownNode(NodeId),
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    #[error("cannot insert {child:?} under its own descendant {parent:?}")]
    HierarchyCycle { parent: NodeId, child: NodeId },
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("store directory missing or not writable: {0}")]
    StoreDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("quota exceeded writing {key:?} ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    #[error("store file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode value for {key:?}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
