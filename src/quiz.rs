//! Movement answers for in-video quiz questions.
//!
//! Each question offers three options; the child answers by moving:
//! jump for A, squat for B, clap for C.

use serde::{Deserialize, Serialize};

use crate::classifier::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerChoice {
    A,
    B,
    C,
}

impl AnswerChoice {
    /// Answer selected by a gesture. Hand raises don't answer.
    pub fn from_gesture(gesture: Gesture) -> Option<AnswerChoice> {
        match gesture {
            Gesture::Jump => Some(AnswerChoice::A),
            Gesture::Squat => Some(AnswerChoice::B),
            Gesture::Clap => Some(AnswerChoice::C),
            Gesture::RaiseLeftHand | Gesture::RaiseRightHand => None,
        }
    }

    /// Gesture the child performs to pick this answer
    pub fn gesture(&self) -> Gesture {
        match self {
            AnswerChoice::A => Gesture::Jump,
            AnswerChoice::B => Gesture::Squat,
            AnswerChoice::C => Gesture::Clap,
        }
    }
}

/// Per-gesture event counters for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureTally {
    pub left_raises: u32,
    pub right_raises: u32,
    pub squats: u32,
    pub jumps: u32,
    pub claps: u32,
}

impl GestureTally {
    pub fn record(&mut self, gesture: Gesture) {
        let counter = match gesture {
            Gesture::RaiseLeftHand => &mut self.left_raises,
            Gesture::RaiseRightHand => &mut self.right_raises,
            Gesture::Squat => &mut self.squats,
            Gesture::Jump => &mut self.jumps,
            Gesture::Clap => &mut self.claps,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn count(&self, gesture: Gesture) -> u32 {
        match gesture {
            Gesture::RaiseLeftHand => self.left_raises,
            Gesture::RaiseRightHand => self.right_raises,
            Gesture::Squat => self.squats,
            Gesture::Jump => self.jumps,
            Gesture::Clap => self.claps,
        }
    }

    pub fn total(&self) -> u32 {
        Gesture::ALL.iter().map(|g| self.count(*g)).sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_mapping() {
        assert_eq!(AnswerChoice::from_gesture(Gesture::Jump), Some(AnswerChoice::A));
        assert_eq!(AnswerChoice::from_gesture(Gesture::Squat), Some(AnswerChoice::B));
        assert_eq!(AnswerChoice::from_gesture(Gesture::Clap), Some(AnswerChoice::C));
        assert_eq!(AnswerChoice::from_gesture(Gesture::RaiseLeftHand), None);
        assert_eq!(AnswerChoice::from_gesture(Gesture::RaiseRightHand), None);

        for choice in [AnswerChoice::A, AnswerChoice::B, AnswerChoice::C] {
            assert_eq!(AnswerChoice::from_gesture(choice.gesture()), Some(choice));
        }
    }

    #[test]
    fn test_tally() {
        let mut tally = GestureTally::default();
        tally.record(Gesture::Jump);
        tally.record(Gesture::Jump);
        tally.record(Gesture::Clap);

        assert_eq!(tally.jumps, 2);
        assert_eq!(tally.count(Gesture::Clap), 1);
        assert_eq!(tally.count(Gesture::Squat), 0);
        assert_eq!(tally.total(), 3);

        tally.reset();
        assert_eq!(tally.total(), 0);
    }
}
