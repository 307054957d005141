//! Repository for the `wiki_settings` key/value table.

use sqlx::PgPool;
use wikifarm_core::types::DbId;

/// Reads individual per-wiki settings.
pub struct WikiSettingRepo;

impl WikiSettingRepo {
    /// Fetch the value of `setting` for `wiki_id`, if one is stored.
    pub async fn get(
        pool: &PgPool,
        wiki_id: DbId,
        setting: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT ws_value FROM wiki_settings WHERE ws_wiki = $1 AND ws_setting = $2",
        )
        .bind(wiki_id)
        .bind(setting)
        .fetch_optional(pool)
        .await
    }
}
