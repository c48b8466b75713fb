use anyhow::{bail, Context, Result};

/// Where uploaded resume files are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Local { upload_dir: String },
    S3(S3Settings),
}

#[derive(Debug, Clone, PartialEq)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub skills_db_path: String,
    pub storage: StorageBackend,
    pub session_ttl_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            skills_db_path: env_or("SKILLS_DB_PATH", "data/skills_db.json"),
            storage: storage_from_env()?,
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 3600)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn storage_from_env() -> Result<StorageBackend> {
    match env_or("STORAGE_BACKEND", "local").to_lowercase().as_str() {
        "local" => Ok(StorageBackend::Local {
            upload_dir: env_or("UPLOAD_DIR", "media/uploads"),
        }),
        "s3" => Ok(StorageBackend::S3(S3Settings {
            bucket: require_env("S3_BUCKET")?,
            endpoint: std::env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            region: env_or("AWS_REGION", "us-east-1"),
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
        })),
        other => bail!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let port: u16 = parse_env("RESUME_API_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_BAD_TTL", "soon");
        let result: Result<u64> = parse_env("RESUME_API_TEST_BAD_TTL", 3600);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_or_falls_back() {
        assert_eq!(env_or("RESUME_API_TEST_UNSET_DIR", "media/uploads"), "media/uploads");
    }
}
