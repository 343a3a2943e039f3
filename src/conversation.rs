use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that translates slang or vernacular language into standard English. Your main task is to provide clear, easy-to-understand translations. You should also try to give context where necessary to make the translations as useful as possible.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    #[allow(dead_code)]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Messages sent with a single translation request, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// System instruction followed by the user's text, verbatim.
    pub fn for_input(raw: &str) -> Self {
        Self {
            messages: vec![
                Message::new(Role::System, SYSTEM_PROMPT),
                Message::new(Role::User, raw),
            ],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
