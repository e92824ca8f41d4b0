use std::collections::HashMap;
use std::sync::Arc;

use gohte_core::editor::EditorSession;
use gohte_core::types::DbId;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::mailer::Mailer;
use crate::storage::LocalStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub pool: gohte_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// In-memory editor sessions, one per signed-in admin.
    pub editors: EditorStore,
    pub storage: Arc<LocalStorage>,
    pub mailer: Arc<dyn Mailer>,
}

/// Editor sessions keyed by user id.
///
/// Drafts are not persisted; a server restart discards unsaved edits.
#[derive(Clone, Default)]
pub struct EditorStore {
    inner: Arc<RwLock<HashMap<DbId, EditorSession>>>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the user's session (an empty one if none exists).
    pub async fn snapshot(&self, user_id: DbId) -> EditorSession {
        self.inner
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Run `f` against the user's session under the write lock.
    pub async fn with_session<R>(
        &self,
        user_id: DbId,
        f: impl FnOnce(&mut EditorSession) -> R,
    ) -> R {
        let mut sessions = self.inner.write().await;
        f(sessions.entry(user_id).or_default())
    }

    /// Close every session that is editing `work_id`. Returns how many were closed.
    pub async fn close_work(&self, work_id: DbId) -> usize {
        let mut sessions = self.inner.write().await;
        let mut closed = 0;
        for session in sessions.values_mut().filter(|s| s.holds(work_id)) {
            session.close();
            closed += 1;
        }
        closed
    }

    /// Drop the user's session entirely (on logout).
    pub async fn remove(&self, user_id: DbId) {
        self.inner.write().await.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use gohte_core::blocks::ContentBlocks;
    use gohte_core::work::{WorkDraft, WorkFields};

    use super::*;

    fn draft(id: DbId) -> WorkDraft {
        WorkDraft {
            id,
            fields: WorkFields::new_project(2024),
            blocks: ContentBlocks::single_empty_text(),
        }
    }

    #[tokio::test]
    async fn sessions_are_isolated_per_user() {
        let store = EditorStore::new();
        store.with_session(1, |s| s.open(draft(10), false)).await;

        assert!(store.snapshot(1).await.holds(10));
        assert!(store.snapshot(2).await.draft().is_none());
    }

    #[tokio::test]
    async fn close_work_closes_every_holder() {
        let store = EditorStore::new();
        store.with_session(1, |s| s.open(draft(10), false)).await;
        store.with_session(2, |s| s.open(draft(10), true)).await;
        store.with_session(3, |s| s.open(draft(11), false)).await;

        assert_eq!(store.close_work(10).await, 2);
        assert!(store.snapshot(1).await.draft().is_none());
        assert!(store.snapshot(3).await.holds(11));
    }
}
