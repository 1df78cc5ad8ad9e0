use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "whiskyshelf.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// DynamoDB table name (default: "whiskies")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_table: String,
    /// Directory served under /assets (default: "assets")
    pub assets_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "whiskyshelf.db")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "whiskies")
    /// - `ASSETS_DIR` - static assets directory (default: "assets")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "whiskyshelf.db".to_string()),
            dynamodb_table: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "whiskies".to_string()),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("ASSETS_DIR");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "whiskyshelf.db");
        assert_eq!(config.dynamodb_table, "whiskies");
        assert_eq!(config.assets_dir, "assets");
    }
}
