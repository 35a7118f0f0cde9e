// Activity data types
// Defines the catalog records exposed by the /activities API

use serde::{Deserialize, Serialize};

/// A single extracurricular activity offering.
///
/// The activity name is the catalog key and lives outside this record.
/// Only `participants` changes after startup; the rest is fixed seed data.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Registered student emails, in signup order. No duplicates.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Whether the activity has reached its capacity limit.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    /// Whether the given email is already on the roster.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
