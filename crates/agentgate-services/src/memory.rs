//! In-memory memory service with keyword matching.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use agentgate_protocols::{Content, MemoryEntry, MemoryError, MemoryService, Session};

/// Keeps ingested contents per app and user and matches queries by shared words.
pub struct InMemoryMemoryService {
    entries: RwLock<HashMap<(String, String), Vec<MemoryEntry>>>,
}

impl InMemoryMemoryService {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn key(app_name: &str, user_id: &str) -> (String, String) {
        (app_name.to_string(), user_id.to_string())
    }
}

impl Default for InMemoryMemoryService {
    fn default() -> Self {
        Self::new()
    }
}

fn words(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl MemoryService for InMemoryMemoryService {
    async fn add_session_to_memory(
        &self,
        session: &Session,
        contents: Vec<Content>,
    ) -> Result<(), MemoryError> {
        let now = Utc::now();
        let new_entries = contents
            .into_iter()
            .filter(|content| !content.text().trim().is_empty())
            .map(|content| MemoryEntry {
                author: content.role.clone(),
                content,
                timestamp: now,
            });

        self.entries
            .write()
            .await
            .entry(Self::key(&session.app_name, &session.user_id))
            .or_default()
            .extend(new_entries);
        Ok(())
    }

    async fn search_memory(
        &self,
        app_name: &str,
        user_id: &str,
        query: &str,
    ) -> Result<Vec<MemoryEntry>, MemoryError> {
        let query_words = words(query);
        if query_words.is_empty() {
            return Ok(Vec::new());
        }

        let entries = self.entries.read().await;
        Ok(entries
            .get(&Self::key(app_name, user_id))
            .map(|list| {
                list.iter()
                    .filter(|entry| !words(&entry.content.text()).is_disjoint(&query_words))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
