//! Bounded conversation window.

use std::collections::VecDeque;

use cabinet_core::messages::Message;

/// Conversation history with a fixed capacity.
///
/// Appending past capacity drops the oldest messages, so long sessions keep
/// a sliding window of recent turns rather than growing without bound.
#[derive(Debug, Clone)]
pub struct History {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl History {
    /// Create an empty history holding at most `capacity` messages.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append one message, evicting the oldest if at capacity.
    ///
    /// A tool result is only valid after the assistant message that
    /// requested it, so eviction also drops any results stranded at the
    /// front of the window. The window may hold fewer messages than
    /// `capacity` as a result.
    pub fn push(&mut self, message: Message) {
        if self.messages.len() >= self.capacity {
            let _ = self.messages.pop_front();
        }
        self.messages.push_back(message);
        while matches!(self.messages.front(), Some(Message::ToolResult { .. })) {
            let _ = self.messages.pop_front();
        }
    }

    /// Append several messages in order.
    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            self.push(message);
        }
    }

    /// Snapshot of the window, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    /// Number of retained messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
