//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::records::RecordStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Record storage, injected at startup
    pub records: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
