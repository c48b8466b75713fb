//! Session store: holds extracted resume text between the upload and analyze calls.
//!
//! Entries live in Redis under `resume_session:<uuid>` and expire after the configured TTL.

use redis::{Client as RedisClient, RedisError};
use tracing::debug;
use uuid::Uuid;

const KEY_PREFIX: &str = "resume_session";

#[derive(Clone)]
pub struct SessionStore {
    client: RedisClient,
    ttl_secs: u64,
}

fn session_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}:{id}")
}

impl SessionStore {
    pub fn new(client: RedisClient, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    /// Saves `text` under a fresh session id.
    pub async fn store_text(&self, text: &str) -> Result<Uuid, RedisError> {
        let id = Uuid::new_v4();
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(session_key(id))
            .arg(text)
            .arg("EX")
            .arg(self.ttl_secs.max(1))
            .query_async::<_, ()>(&mut conn)
            .await?;
        debug!("Stored {} chars in session {id}", text.len());
        Ok(id)
    }

    /// Text for `id`, or `None` when the session never existed or has expired.
    pub async fn load_text(&self, id: Uuid) -> Result<Option<String>, RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("GET")
            .arg(session_key(id))
            .query_async::<_, Option<String>>(&mut conn)
            .await
    }
}
