use serde::{Deserialize, Serialize};

/// Pagination metadata embedded in every list response.
///
/// `previous_page` and `next_page` are `-1` when there is no such page,
/// matching the wire value rather than mapping to an option.
#[derive(Serialize, Deserialize, Debug)]
pub struct Pagination {
    pub total_entries: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub previous_page: i64,
    pub next_page: i64,
    /// Field the results are ordered by (e.g. `created_at`).
    pub order: String,
    /// `asc` or `desc`.
    pub order_asc_desc: String,
}
