//! Snapshot store database schema.

/// SQL to create the snapshot table. Mirrors
/// `migrations/0001_create_bot_storage.sql`.
pub const CREATE_BOT_STORAGE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS bot_storage (
    key        VARCHAR(255) PRIMARY KEY,
    value      JSONB NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
";

#[cfg(test)]
mod tests {
    use super::*;

    const MIGRATION: &str = include_str!("../../../migrations/0001_create_bot_storage.sql");

    fn normalize(sql: &str) -> String {
        sql.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end_matches(';')
            .to_owned()
    }

    #[test]
    fn test_schema_matches_migration() {
        assert_eq!(normalize(CREATE_BOT_STORAGE_TABLE), normalize(MIGRATION));
    }
}
