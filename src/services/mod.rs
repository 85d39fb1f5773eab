pub mod access_guard;
pub mod chatbot;
pub mod completion;
pub mod conversation;
