// src/services/conversation.rs
use std::{fmt::Debug, sync::Arc};

use tokio::sync::{Mutex, MutexGuard};

use crate::message::Message;

/// Append-only transcript shared by every caller, seeded with the system
/// instruction. Entries are never removed or reordered.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<Mutex<Vec<Message>>>,
}

impl Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore").finish_non_exhaustive()
    }
}

impl ConversationStore {
    // Create a store holding only the system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vec![Message::system(system_prompt)])),
        }
    }

    /// Append a message to the end of the history. Returns the new length.
    pub async fn append(&self, message: Message) -> usize {
        self.begin_turn().await.append(message)
    }

    /// Copy of the full history in insertion order.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Exclusive access to the history until the returned turn is dropped.
    /// Other appends and snapshots wait, so a whole request/reply exchange
    /// lands contiguously.
    pub async fn begin_turn(&self) -> ConversationTurn<'_> {
        ConversationTurn {
            guard: self.inner.lock().await,
        }
    }
}

pub struct ConversationTurn<'a> {
    guard: MutexGuard<'a, Vec<Message>>,
}

impl ConversationTurn<'_> {
    pub fn append(&mut self, message: Message) -> usize {
        self.guard.push(message);
        self.guard.len()
    }

    pub fn messages(&self) -> &[Message] {
        &self.guard
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.guard.clone()
    }
}
