use glam::Vec3;

use crate::types::EntityId;

/// Payload of a message between competitors.
#[derive(Clone, Copy, Debug, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Message {
    /// The receiver was hit by a projectile.
    Hit {
        damage: f32,
        attacker_position: Vec3,
    },
    /// The sender died.
    Dead,
}

/// A message addressed from one competitor to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Telegram {
    pub sender: EntityId,
    pub receiver: EntityId,
    pub message: Message,
}

impl Telegram {
    pub fn new(sender: EntityId, receiver: EntityId, message: Message) -> Self {
        Self {
            sender,
            receiver,
            message,
        }
    }
}
