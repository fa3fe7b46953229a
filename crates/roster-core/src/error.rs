//! Error types for the `roster-core` crate.
//!
//! All fallible registry operations return [`RosterError`].

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// No activity with this name exists in the registry.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// The participant email.
        email: String,
        /// The activity name.
        activity: String,
    },

    /// The email is not on the activity's roster.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        /// The participant email.
        email: String,
        /// The activity name.
        activity: String,
    },

    /// The activity has reached its maximum participant count.
    #[error("activity {activity} is full ({capacity} participants)")]
    ActivityFull {
        /// The full activity.
        activity: String,
        /// Maximum participants.
        capacity: u32,
    },

    /// The supplied string is not a plausible email address.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Two seed entries share the same activity name.
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    /// A seed entry lists the same participant twice.
    #[error("duplicate participant {email} in seed for {activity}")]
    DuplicateSeedParticipant {
        /// The repeated email.
        email: String,
        /// The activity name.
        activity: String,
    },

    /// A seed entry lists more participants than its capacity allows.
    #[error("seed for {activity} exceeds capacity ({capacity})")]
    SeedOverCapacity {
        /// The activity name.
        activity: String,
        /// Maximum participants.
        capacity: u32,
    },
}
