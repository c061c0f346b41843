use async_trait::async_trait;
use parking_lot::RwLock;

use crate::database::seed::seed_directory;
use crate::error::ActivityError;
use crate::models::ActivityDirectory;

/// Storage boundary for the activity directory.
///
/// Handlers only talk to this trait, so a persistent backend can replace the
/// in-memory one without touching the web layer. Implementations must make
/// each membership check and its mutation a single atomic step.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity, in directory order.
    async fn list(&self) -> ActivityDirectory;

    /// Append `email` to the roster of `activity`.
    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), ActivityError>;

    /// Remove `email` from the roster of `activity`.
    async fn remove_participant(&self, activity: &str, email: &str)
        -> Result<(), ActivityError>;

    /// Restore the seed directory.
    async fn reset(&self);
}

pub struct InMemoryActivityRepository {
    activities: RwLock<ActivityDirectory>,
}

impl InMemoryActivityRepository {
    pub fn seeded() -> Self {
        Self::from_directory(seed_directory())
    }

    pub fn from_directory(activities: ActivityDirectory) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> ActivityDirectory {
        self.activities.read().clone()
    }

    async fn add_participant(&self, activity: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.activities.write();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::NotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(ActivityError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        Ok(())
    }

    async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<(), ActivityError> {
        let mut activities = self.activities.write();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::NotFound(activity.to_string()))?;

        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        entry.participants.remove(pos);
        Ok(())
    }

    async fn reset(&self) {
        *self.activities.write() = seed_directory();
    }
}
