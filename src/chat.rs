//! Patient Chat
//!
//! A chat session is a room plus the patient's identity. It fetches the
//! room's messages once when opened and again after every message it sends.
//! There is no polling loop; whichever list response arrives last replaces
//! the displayed messages.

use crate::client::{ClinicApi, ClinicResult};
use crate::models::{ChatMessage, Created, NewMessage, DEFAULT_SENDER, PATIENT_ROOM};

/// Chat state for one room
pub struct ChatSession<'a, A: ClinicApi + ?Sized> {
    api: &'a A,
    room: String,
    sender_name: String,
    sender_email: String,
    messages: Vec<ChatMessage>,
}

impl<'a, A: ClinicApi + ?Sized> ChatSession<'a, A> {
    /// Session in the patient room
    pub fn new(api: &'a A, sender_name: impl Into<String>, sender_email: impl Into<String>) -> Self {
        Self::in_room(api, PATIENT_ROOM, sender_name, sender_email)
    }

    pub fn in_room(
        api: &'a A,
        room: impl Into<String>,
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Self {
        Self {
            api,
            room: room.into(),
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            messages: Vec::new(),
        }
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    /// Name attached to outgoing messages
    pub fn sender(&self) -> &str {
        if self.sender_name.is_empty() {
            DEFAULT_SENDER
        } else {
            &self.sender_name
        }
    }

    /// Messages from the most recent fetch
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Rendered chat rows, one per message
    pub fn rows(&self) -> Vec<String> {
        self.messages.iter().map(ChatMessage::render).collect()
    }

    /// Initial fetch of the room's messages
    pub async fn open(&mut self) -> ClinicResult<&[ChatMessage]> {
        self.refresh().await
    }

    /// Re-fetch the room's messages, replacing the held list
    pub async fn refresh(&mut self) -> ClinicResult<&[ChatMessage]> {
        self.messages = self.api.list_messages(&self.room).await?;
        tracing::debug!(room = %self.room, count = self.messages.len(), "Chat refreshed");
        Ok(&self.messages)
    }

    /// Send a message and refresh the list.
    ///
    /// Empty content is ignored: nothing is sent and the list is not
    /// refreshed.
    pub async fn send(&mut self, content: &str) -> ClinicResult<Option<Created>> {
        if content.is_empty() {
            return Ok(None);
        }

        let message = NewMessage::new(&self.room, self.sender(), &self.sender_email, content);
        let created = self.api.post_message(&message).await?;
        self.refresh().await?;
        Ok(created)
    }
}
