use serde::{Deserialize, Serialize};

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Response payload for /chat.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// The chatbot's reply (plain text).
    pub reply: String,
}
