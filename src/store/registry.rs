// Activity registry module
// Shared in-memory catalog with lock-protected signup/unregister operations

use std::collections::HashMap;
use std::fmt;
use tokio::sync::RwLock;

use super::types::Activity;

/// Signup failure reasons, mapped to HTTP status codes by the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// No activity with the requested name exists.
    ActivityNotFound,
    /// The email is already on the activity's roster.
    AlreadySignedUp,
    /// The activity has reached `max_participants`.
    ActivityFull,
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActivityNotFound => write!(f, "Activity not found"),
            Self::AlreadySignedUp => write!(f, "Student is already signed up"),
            Self::ActivityFull => write!(f, "Activity is full"),
        }
    }
}

impl std::error::Error for SignupError {}

/// Unregister failure reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterError {
    /// No activity with the requested name exists.
    ActivityNotFound,
    /// The email is not on the activity's roster.
    NotSignedUp,
}

impl fmt::Display for UnregisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActivityNotFound => write!(f, "Activity not found"),
            Self::NotSignedUp => write!(f, "Student is not signed up for this activity"),
        }
    }
}

impl std::error::Error for UnregisterError {}

/// In-memory activity catalog.
///
/// The activity set is fixed at construction; only participant rosters
/// change afterwards. Every mutation runs its validation and its write
/// under a single `write()` guard, so the capacity and duplicate
/// invariants hold under the multi-threaded runtime (no check-then-act
/// window between tasks).
pub struct ActivityStore {
    activities: RwLock<HashMap<String, Activity>>,
}

impl ActivityStore {
    /// Create a store from a validated seed catalog.
    pub fn new(catalog: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// Full snapshot of the catalog with current rosters.
    pub async fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Whether an activity with this exact name exists.
    pub async fn contains(&self, name: &str) -> bool {
        self.activities.read().await.contains_key(name)
    }

    /// Look up a single activity by exact name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Number of activities in the catalog.
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Add a student to an activity's roster.
    ///
    /// The duplicate check runs before the capacity check: a student who
    /// is already on a full roster gets `AlreadySignedUp`, not
    /// `ActivityFull`. On success the email is appended, preserving
    /// signup order, and the confirmation message names both the student
    /// and the activity.
    pub async fn signup(&self, name: &str, email: &str) -> Result<String, SignupError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {name}"))
    }

    /// Remove a student from an activity's roster.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<String, UnregisterError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(UnregisterError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(UnregisterError::NotSignedUp);
        };

        activity.participants.remove(pos);
        Ok(format!("Successfully removed {email} from {name}"))
    }
}
