//! Movement domain: behavior state of a controlled character.

use crate::movement::Facing;
use crate::sprites::AnimationClip;

/// Mutually exclusive behavior of a character.
///
/// Jumping, punching and leaving are "in flight" actions: while one of them
/// is active the character ignores input until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BehaviorState {
    #[default]
    Idle,
    Walking(Facing),
    Jumping,
    Punching,
    /// Walking through the door of `zone`. Only an external reset ends this.
    Leaving { zone: usize },
}

/// Presentation hints derived from the behavior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHints {
    pub clip: AnimationClip,
    pub looping: bool,
}

impl BehaviorState {
    /// Whether input is polled and resolved this tick.
    pub fn accepts_input(&self) -> bool {
        matches!(self, BehaviorState::Idle | BehaviorState::Walking(_))
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self, BehaviorState::Jumping)
    }

    pub fn is_punching(&self) -> bool {
        matches!(self, BehaviorState::Punching)
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self, BehaviorState::Leaving { .. })
    }

    pub fn animation_hints(&self) -> AnimationHints {
        let clip = match self {
            BehaviorState::Walking(Facing::Right) => AnimationClip::WalkRight,
            BehaviorState::Walking(Facing::Left) => AnimationClip::WalkLeft,
            BehaviorState::Idle | BehaviorState::Jumping => AnimationClip::Idle,
            BehaviorState::Punching => AnimationClip::Punch,
            BehaviorState::Leaving { .. } => AnimationClip::EnterDoor,
        };

        AnimationHints {
            clip,
            looping: matches!(self, BehaviorState::Walking(_)),
        }
    }
}
