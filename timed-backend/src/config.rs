// src/config.rs
use dotenvy::dotenv;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// 指定された場合はこのスキーマを search_path にして接続する
    pub db_schema: Option<String>,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let database_url = env::var("DATABASE_URL")?;
        let db_schema = env::var("DB_SCHEMA").ok().filter(|s| !s.is_empty());
        let max_connections = parse_max_connections(env::var("DB_MAX_CONNECTIONS").ok());

        Ok(Config {
            database_url,
            db_schema,
            max_connections,
        })
    }
}

/// `DB_MAX_CONNECTIONS` の値。未設定・不正値・0 の場合は既定値
fn parse_max_connections(value: Option<String>) -> u32 {
    let Some(raw) = value else {
        return DEFAULT_MAX_CONNECTIONS;
    };

    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(
                value = %raw,
                default = DEFAULT_MAX_CONNECTIONS,
                "Invalid DB_MAX_CONNECTIONS, using default"
            );
            DEFAULT_MAX_CONNECTIONS
        }
    }
}
