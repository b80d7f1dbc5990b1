use serde::{Deserialize, Serialize};

/// Non-fatal signals surfaced to callers. Warnings never carry an error path;
/// they report deprecated usage and tolerated config mistakes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Warning {
    Deprecated {
        method: String,
        replacement: String,
    },
    UnknownConfigOption {
        key: String,
    },
    InvalidConfigValue {
        key: String,
        value: String,
    },
}

#[derive(Debug, Default, Clone)]
pub struct Warnings {
    queue: Vec<Warning>,
}

impl Warnings {
    pub fn push(&mut self, warning: Warning) {
        self.queue.push(warning);
    }

    pub fn deprecated(&mut self, method: &str, replacement: &str) {
        self.queue.push(Warning::Deprecated {
            method: method.to_string(),
            replacement: replacement.to_string(),
        });
    }

    pub fn drain(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.queue.iter()
    }
}
