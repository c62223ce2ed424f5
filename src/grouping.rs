//! Per-message layout flags: alignment, sender header, delete affordance.

use crate::content::{classify, MessageContent};
use crate::deletion::DeletionOverlay;
use crate::model::{Message, UserProfile};

/// Everything the renderer needs to lay out one bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageLayout {
    /// Sent by the viewing user; right-aligned, never shows sender identity
    pub is_mine: bool,
    /// First message of a run from someone else: paint avatar and name
    pub show_sender_info: bool,
    /// Same sender as the previous message; tighter top spacing
    pub is_consecutive: bool,
    pub is_deleted: bool,
    pub can_delete: bool,
    pub content: MessageContent,
}

impl MessageLayout {
    pub fn is_special_content(&self) -> bool {
        self.content.is_special()
    }
}

/// The previous message came from the same sender.
pub fn is_same_user(messages: &[Message], index: usize) -> bool {
    index > 0
        && index < messages.len()
        && messages[index - 1].sender.id == messages[index].sender.id
}

/// Nothing is "mine" until a profile is loaded.
pub fn is_mine(message: &Message, user: Option<&UserProfile>) -> bool {
    user.is_some_and(|u| message.is_from(&u.id))
}

/// Compute the layout of `messages[index]`.
pub fn layout(
    messages: &[Message],
    index: usize,
    user: Option<&UserProfile>,
    overlay: &DeletionOverlay,
) -> MessageLayout {
    let message = &messages[index];
    let is_mine = is_mine(message, user);
    let is_consecutive = is_same_user(messages, index);
    let is_deleted = overlay.is_deleted(message);

    MessageLayout {
        is_mine,
        show_sender_info: !is_consecutive && !is_mine,
        is_consecutive,
        is_deleted,
        can_delete: is_mine && !is_deleted,
        content: classify(&message.content),
    }
}

/// Layouts for a whole list, in order.
pub fn layout_all(
    messages: &[Message],
    user: Option<&UserProfile>,
    overlay: &DeletionOverlay,
) -> Vec<MessageLayout> {
    (0..messages.len())
        .map(|i| layout(messages, i, user, overlay))
        .collect()
}
