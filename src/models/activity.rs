use indexmap::IndexMap;
use serde::Serialize;

/// Activity name -> record, in seed order.
pub type ActivityDirectory = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational only, signups are never capped by it.
    pub max_participants: u32,
    pub participants: Vec<String>, // emails, signup order
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
