// src/services/chatbot.rs
use tracing::info;

use super::{
    completion::{CompletionClient, GenerationParams},
    conversation::ConversationStore,
};
use crate::{error::CompletionError, message::Message};

#[derive(Debug)]
pub struct ChatOutcome {
    pub reply: String,
    pub conversation: Vec<Message>,
}

/// Run one exchange: record the user message, ask the model with the whole
/// history, record the reply. The store stays locked for the full exchange.
///
/// On upstream failure the user message stays in the history and nothing else
/// is appended.
pub async fn generate_reply(
    store: &ConversationStore,
    client: &dyn CompletionClient,
    user_message: &str,
) -> Result<ChatOutcome, CompletionError> {
    let mut turn = store.begin_turn().await;
    turn.append(Message::user(user_message));

    let reply = client
        .complete(turn.messages(), &GenerationParams::default())
        .await?;

    let len = turn.append(Message::assistant(reply.clone()));
    info!(history_len = len, "assistant reply recorded");

    Ok(ChatOutcome {
        reply,
        conversation: turn.snapshot(),
    })
}
