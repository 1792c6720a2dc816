// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub department: String,
    pub office: String,
    pub email: String,
}

impl FacultyRecord {
    /// Basic `local@domain.tld` shape, no whitespace anywhere.
    pub fn has_valid_email(&self) -> bool {
        let mut parts = self.email.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && domain.contains('.')
                    && !self.email.chars().any(char::is_whitespace)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub name: String,
    #[serde(default = "default_available")]
    pub available: bool,
    pub capacity: u32,
}

fn default_available() -> bool {
    true
}

/// Payload of a successful chat reply. The serialized form carries a
/// `type` tag the widget keys its rendering template on.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChatData {
    Faculty(Vec<FacultyRecord>),
    Rooms(Vec<RoomRecord>),
    Text(String),
}

/// Uniform response wrapper. Exactly one of `data`/`error` is populated.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub data: Option<ChatData>,
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok(data: ChatData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "dbState")]
    pub db_state: u8,
    pub timestamp: u64,
}
