//! Selection history model.

use serde::Serialize;
use sqlx::FromRow;
use teampicker_core::types::{DbId, Timestamp};

/// Maximum number of entries returned by a history lookup.
pub const HISTORY_LIMIT: i64 = 10;

/// A full row from the `history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub team_name: String,
    pub selected_at: Timestamp,
}

/// The public view of a history row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryItem {
    pub team_name: String,
    pub selected_at: Timestamp,
}
