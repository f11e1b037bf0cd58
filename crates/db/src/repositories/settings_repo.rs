//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::settings::SiteSetting;

/// Column list for `site_settings` queries.
const SETTING_COLUMNS: &str = "id, section, data, updated_at";

/// Provides read/upsert access to site settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row for a section, if one has been saved.
    pub async fn get(pool: &PgPool, section: &str) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {SETTING_COLUMNS} FROM site_settings WHERE section = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace a section's settings document.
    ///
    /// Uses `ON CONFLICT (section) DO UPDATE` so repeated saves are
    /// idempotent.
    pub async fn upsert(
        pool: &PgPool,
        section: &str,
        data: &serde_json::Value,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (section, data) \
             VALUES ($1, $2) \
             ON CONFLICT (section) DO UPDATE SET \
                data = EXCLUDED.data, \
                updated_at = now() \
             RETURNING {SETTING_COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(section)
            .bind(data)
            .fetch_one(pool)
            .await
    }
}
