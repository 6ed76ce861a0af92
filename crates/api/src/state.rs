use std::sync::Arc;

use teampicker_core::picker::TeamPicker;
use tokio::sync::Mutex;

/// Shared state for the persisted multi-project service.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: teampicker_db::DbPool,
}

/// Shared state for the in-memory picker service.
///
/// The picker sits behind a single mutex so a draw (read pool, remove,
/// append) is never interleaved with another request.
#[derive(Clone)]
pub struct PickerState {
    pub picker: Arc<Mutex<TeamPicker>>,
}

impl PickerState {
    pub fn new(picker: TeamPicker) -> Self {
        Self {
            picker: Arc::new(Mutex::new(picker)),
        }
    }
}
