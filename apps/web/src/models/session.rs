use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Research Assistant",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionHistoryResponse {
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub message_count: u32,
}

impl SessionHistoryResponse {
    /// Whether `message_count` agrees with the messages actually returned.
    pub fn is_consistent(&self) -> bool {
        self.message_count as usize == self.messages.len()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub session_id: String,
    pub message_count: u32,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub first_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl SessionSummary {
    pub fn title(&self) -> &str {
        match self.first_query.as_deref() {
            Some(query) if !query.trim().is_empty() => query,
            _ => "Untitled session",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionsResponse {
    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
    pub total_count: u32,
}

impl SessionsResponse {
    /// Whether `total_count` agrees with the sessions actually returned.
    pub fn is_consistent(&self) -> bool {
        self.total_count as usize == self.sessions.len()
    }
}
