//! XShare page platform: headless document, timers, storage and the runtime
//! that drives the core state machine from page events.
mod accessibility;
mod animation;
mod config;
mod contract;
mod diagnostics;
mod dom;
mod effects;
mod error;
mod events;
mod html;
mod interactions;
mod persist;
mod polish;
mod render;
mod runtime;
mod storage;
mod timers;

pub mod logging;

pub use config::{AnimationConfig, FilterConfig, ToastConfig, UiConfig};
pub use contract::*;
pub use diagnostics::{measure_performance, GENERIC_ERROR_MESSAGE};
pub use dom::{parse_selector, Document, NodeId, Rect};
pub use error::{ConfigError, DomError, PersistError, StorageError};
pub use events::{EventOutcome, PageEvent};
pub use persist::{ensure_store_dir, AtomicFileWriter};
pub use render::render;
pub use runtime::PageRuntime;
pub use scraper::Selector;
pub use storage::{
    load_from_local_storage, remove_from_local_storage, save_to_local_storage, FileStore,
    KeyValueStore, MemoryStore, SELECTED_ROLE_KEY,
};
pub use timers::{TimerQueue, TimerTask};
