//! Activity records and their participant rosters.

use serde::{Deserialize, Serialize};

use crate::email::ParticipantEmail;

/// A named activity with its metadata and current roster.
///
/// The activity name is the registry key and is not stored here. The
/// roster keeps insertion order for display but carries no ordering
/// semantics; it never holds the same email twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description.
    pub description: String,
    /// When the activity meets, e.g. "Fridays, 3:30 PM - 5:00 PM".
    #[serde(default)]
    pub schedule: String,
    /// Maximum number of participants.
    pub max_participants: u32,
    /// Emails of the currently enrolled participants.
    #[serde(default)]
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Whether `email` is currently enrolled.
    pub fn has_participant(&self, email: &ParticipantEmail) -> bool {
        self.participants.contains(email)
    }

    /// Whether the roster has reached `max_participants`.
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// Number of participants that can still sign up.
    pub fn spots_left(&self) -> usize {
        usize::try_from(self.max_participants)
            .unwrap_or(usize::MAX)
            .saturating_sub(self.participants.len())
    }

    /// Remove `email` from the roster. Returns `true` if it was present.
    pub(crate) fn remove_participant(&mut self, email: &ParticipantEmail) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> ParticipantEmail {
        ParticipantEmail::parse(s).unwrap()
    }

    #[test]
    fn spots_left_counts_down() {
        let mut activity = Activity::new("Board games", "Mondays", 2);
        assert_eq!(activity.spots_left(), 2);
        activity.participants.push(email("a@example.com"));
        assert_eq!(activity.spots_left(), 1);
        assert!(!activity.is_full());
        activity.participants.push(email("b@example.com"));
        assert!(activity.is_full());
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let activity = Activity::new("Closed", "Never", 0);
        assert!(activity.is_full());
    }

    #[test]
    fn remove_participant_reports_membership() {
        let mut activity = Activity::new("Chess", "Fridays", 10);
        let a = email("a@example.com");
        activity.participants.push(a.clone());
        assert!(activity.has_participant(&a));
        assert!(activity.remove_participant(&a));
        assert!(!activity.has_participant(&a));
        assert!(!activity.remove_participant(&a));
    }

    #[test]
    fn serializes_expected_shape() {
        let mut activity = Activity::new("Chess", "Fridays", 12);
        activity.participants.push(email("michael@mergington.edu"));
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["description"], "Chess");
        assert_eq!(json["schedule"], "Fridays");
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
    }
}
