use sqlx::PgPool;

use crate::models::item::{Item, ItemPage};

pub const DEFAULT_PAGE_SIZE: i64 = 15;
pub const MAX_PAGE_SIZE: i64 = 100;

pub struct ItemService;

impl ItemService {
    /// One page of items. Fetches `limit + 1` rows so `has_more` needs no
    /// separate COUNT query.
    pub async fn list(pool: &PgPool, page: i64, limit: i64) -> anyhow::Result<ItemPage> {
        let (offset, limit) = page_window(page, limit);
        let rows = sqlx::query_as::<_, Item>(
            "SELECT id, name_en, name_ar, created_at FROM items
             ORDER BY created_at, id
             LIMIT $1 OFFSET $2",
        )
        .bind(limit + 1)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(trim_overfetch(rows, limit))
    }
}

/// Row offset and clamped page size for a 1-based page number.
///
/// The offset saturates, so an absurd page reads past the end and comes back
/// empty.
fn page_window(page: i64, limit: i64) -> (i64, i64) {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    let page = page.max(1);
    ((page - 1).saturating_mul(limit), limit)
}

fn trim_overfetch(mut rows: Vec<Item>, limit: i64) -> ItemPage {
    let limit = limit as usize;
    let has_more = rows.len() > limit;
    rows.truncate(limit);
    ItemPage { items: rows, has_more }
}
