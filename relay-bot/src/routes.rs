//! In-memory route table: admin-side message id → chat id of the user whose message it carries.
//!
//! Entries live for the whole process: recorded on every forward, read on every admin reply, never removed.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, cloneable handle to the route table.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: Arc<RwLock<HashMap<i32, i64>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `admin_message_id` in the admin group carries a message from `user_chat_id`.
    /// Re-recording an id overwrites the previous entry.
    pub async fn record(&self, admin_message_id: i32, user_chat_id: i64) {
        self.routes
            .write()
            .await
            .insert(admin_message_id, user_chat_id);
    }

    /// Returns the user chat for a forwarded message, or None if the id was never recorded.
    pub async fn lookup(&self, admin_message_id: i32) -> Option<i64> {
        self.routes.read().await.get(&admin_message_id).copied()
    }

    pub async fn len(&self) -> usize {
        self.routes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.routes.read().await.is_empty()
    }
}
