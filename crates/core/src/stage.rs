use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    /// The blind after this one within an ante; `None` past the boss, which
    /// rolls the ante over instead.
    pub fn next(self) -> Option<BlindKind> {
        match self {
            BlindKind::Small => Some(BlindKind::Big),
            BlindKind::Big => Some(BlindKind::Boss),
            BlindKind::Boss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndState {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    PreBlind,
    Blind(BlindKind),
    PostBlind,
    Shop,
    End(EndState),
}

impl Stage {
    pub fn is_blind(self) -> bool {
        matches!(self, Stage::Blind(_))
    }

    pub fn is_over(self) -> bool {
        matches!(self, Stage::End(_))
    }
}
