use serde::Serialize;
use tracing::{info, warn};

use crate::database::activities_repo::ActivityRepository;
use crate::error::ActivityError;
use crate::models::ActivityDirectory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(repo: &dyn ActivityRepository) -> ActivityDirectory {
    repo.list().await
}

pub async fn sign_up(
    repo: &dyn ActivityRepository,
    activity: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    match repo.add_participant(activity, email).await {
        Ok(()) => {
            info!(activity = %activity, email = %email, "signup accepted");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    repo: &dyn ActivityRepository,
    activity: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    match repo.remove_participant(activity, email).await {
        Ok(()) => {
            info!(activity = %activity, email = %email, "participant unregistered");
            Ok(MessageView {
                message: format!("Unregistered {} from {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
