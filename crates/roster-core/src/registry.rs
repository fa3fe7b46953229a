//! The activity registry: the single mutable store of rosters.
//!
//! [`ActivityRegistry`] maps activity names to [`Activity`] records behind
//! one [`RwLock`]. Reads clone a snapshot under the read guard. Signup and
//! unregister hold the write guard across the membership check and the
//! mutation, so concurrent requests cannot both pass a "not yet enrolled"
//! check and insert the same email twice.
//!
//! The set of activity names is fixed at construction. There is no
//! operation that adds, renames, or deletes an activity.

use std::collections::{BTreeMap, BTreeSet};

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::activity::Activity;
use crate::email::ParticipantEmail;
use crate::error::RosterError;
use crate::seed;

/// In-memory registry of activities and their participant rosters.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Build a registry from seed entries.
    ///
    /// Each entry is checked before it is accepted: names must be unique,
    /// a roster must not list an email twice, and a roster must not exceed
    /// its activity's capacity.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateActivity`],
    /// [`RosterError::DuplicateSeedParticipant`], or
    /// [`RosterError::SeedOverCapacity`] for the first invalid entry.
    pub fn new(seed: impl IntoIterator<Item = (String, Activity)>) -> Result<Self, RosterError> {
        let mut activities = BTreeMap::new();

        for (name, activity) in seed {
            let mut seen = BTreeSet::new();
            for email in &activity.participants {
                if !seen.insert(email) {
                    return Err(RosterError::DuplicateSeedParticipant {
                        email: email.to_string(),
                        activity: name,
                    });
                }
            }

            let capacity = usize::try_from(activity.max_participants).unwrap_or(usize::MAX);
            if activity.participants.len() > capacity {
                return Err(RosterError::SeedOverCapacity {
                    activity: name,
                    capacity: activity.max_participants,
                });
            }

            if activities.contains_key(&name) {
                return Err(RosterError::DuplicateActivity(name));
            }
            activities.insert(name, activity);
        }

        debug!(activity_count = activities.len(), "Activity registry built");

        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    /// Build a registry from the built-in seed activities.
    ///
    /// # Errors
    ///
    /// Propagates any seed validation error from
    /// [`seed::default_activities`] or [`Self::new`].
    pub fn with_default_seed() -> Result<Self, RosterError> {
        Self::new(seed::default_activities()?)
    }

    /// Return a snapshot of every activity keyed by name.
    pub async fn list(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Return a snapshot of a single activity.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if `name` is unknown.
    pub async fn get(&self, name: &str) -> Result<Activity, RosterError> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))
    }

    /// Number of activities in the registry.
    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Whether the registry holds no activities.
    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Enroll `email` in the named activity.
    ///
    /// # Errors
    ///
    /// - [`RosterError::ActivityNotFound`] if `name` is unknown
    /// - [`RosterError::AlreadyRegistered`] if `email` is already enrolled
    /// - [`RosterError::ActivityFull`] if the roster is at capacity
    pub async fn signup(&self, name: &str, email: &ParticipantEmail) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                email: email.to_string(),
                activity: name.to_owned(),
            });
        }

        if activity.is_full() {
            return Err(RosterError::ActivityFull {
                activity: name.to_owned(),
                capacity: activity.max_participants,
            });
        }

        activity.participants.push(email.clone());

        info!(
            activity = name,
            email = %email,
            spots_left = activity.spots_left(),
            "Participant signed up"
        );

        Ok(())
    }

    /// Remove `email` from the named activity.
    ///
    /// # Errors
    ///
    /// - [`RosterError::ActivityNotFound`] if `name` is unknown
    /// - [`RosterError::NotRegistered`] if `email` is not enrolled
    pub async fn unregister(&self, name: &str, email: &ParticipantEmail) -> Result<(), RosterError> {
        let mut activities = self.activities.write().await;

        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        if !activity.remove_participant(email) {
            return Err(RosterError::NotRegistered {
                email: email.to_string(),
                activity: name.to_owned(),
            });
        }

        info!(
            activity = name,
            email = %email,
            spots_left = activity.spots_left(),
            "Participant unregistered"
        );

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn email(s: &str) -> ParticipantEmail {
        ParticipantEmail::parse(s).unwrap()
    }

    fn small_registry(capacity: u32) -> ActivityRegistry {
        ActivityRegistry::new(vec![(
            String::from("Chess Club"),
            Activity::new("Chess", "Fridays", capacity),
        )])
        .unwrap()
    }

    #[tokio::test]
    async fn default_seed_lists_chess_club() {
        let registry = ActivityRegistry::with_default_seed().unwrap();
        let all = registry.list().await;
        assert!(all.contains_key("Chess Club"));
        assert!(!registry.is_empty().await);
        assert_eq!(registry.len().await, all.len());
    }

    #[tokio::test]
    async fn signup_then_unregister_round_trip() {
        let registry = small_registry(5);
        let e = email("test@example.com");

        assert!(!registry.get("Chess Club").await.unwrap().has_participant(&e));

        registry.signup("Chess Club", &e).await.unwrap();
        assert!(registry.get("Chess Club").await.unwrap().has_participant(&e));

        registry.unregister("Chess Club", &e).await.unwrap();
        assert!(!registry.get("Chess Club").await.unwrap().has_participant(&e));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let registry = small_registry(5);
        let e = email("test@example.com");
        registry.signup("Chess Club", &e).await.unwrap();

        let again = registry.signup("Chess Club", &email("TEST@example.com")).await;
        assert_eq!(
            again,
            Err(RosterError::AlreadyRegistered {
                email: String::from("test@example.com"),
                activity: String::from("Chess Club"),
            })
        );
        assert_eq!(registry.get("Chess Club").await.unwrap().participants.len(), 1);
    }

    #[tokio::test]
    async fn signup_unknown_activity() {
        let registry = small_registry(5);
        let result = registry.signup("Knitting", &email("a@example.com")).await;
        assert_eq!(result, Err(RosterError::ActivityNotFound(String::from("Knitting"))));
    }

    #[tokio::test]
    async fn signup_full_activity() {
        let registry = small_registry(1);
        registry.signup("Chess Club", &email("a@example.com")).await.unwrap();
        let result = registry.signup("Chess Club", &email("b@example.com")).await;
        assert_eq!(
            result,
            Err(RosterError::ActivityFull {
                activity: String::from("Chess Club"),
                capacity: 1,
            })
        );
    }

    #[tokio::test]
    async fn unregister_non_member() {
        let registry = small_registry(5);
        let result = registry.unregister("Chess Club", &email("ghost@example.com")).await;
        assert!(matches!(result, Err(RosterError::NotRegistered { .. })));
    }

    #[tokio::test]
    async fn double_unregister_fails_second_time() {
        let registry = small_registry(5);
        let e = email("a@example.com");
        registry.signup("Chess Club", &e).await.unwrap();
        registry.unregister("Chess Club", &e).await.unwrap();
        let second = registry.unregister("Chess Club", &e).await;
        assert!(matches!(second, Err(RosterError::NotRegistered { .. })));
    }

    #[tokio::test]
    async fn unregister_unknown_activity() {
        let registry = small_registry(5);
        let result = registry.unregister("Knitting", &email("a@example.com")).await;
        assert_eq!(result, Err(RosterError::ActivityNotFound(String::from("Knitting"))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_insert_once() {
        let registry = Arc::new(small_registry(100));
        let e = email("race@example.com");

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let e = e.clone();
                tokio::spawn(async move { registry.signup("Chess Club", &e).await })
            })
            .collect();

        let mut successes = 0_usize;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes = successes.saturating_add(1);
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(registry.get("Chess Club").await.unwrap().participants, vec![e]);
    }

    #[test]
    fn rejects_duplicate_activity_names() {
        let result = ActivityRegistry::new(vec![
            (String::from("Chess Club"), Activity::new("a", "b", 1)),
            (String::from("Chess Club"), Activity::new("c", "d", 1)),
        ]);
        assert_eq!(
            result.err(),
            Some(RosterError::DuplicateActivity(String::from("Chess Club")))
        );
    }

    #[test]
    fn rejects_seed_over_capacity() {
        let mut activity = Activity::new("a", "b", 1);
        activity.participants = vec![email("a@example.com"), email("b@example.com")];
        let result = ActivityRegistry::new(vec![(String::from("Tiny"), activity)]);
        assert!(matches!(result, Err(RosterError::SeedOverCapacity { capacity: 1, .. })));
    }

    #[test]
    fn rejects_seed_duplicate_participant() {
        let mut activity = Activity::new("a", "b", 5);
        activity.participants = vec![email("a@example.com"), email("A@example.com")];
        let result = ActivityRegistry::new(vec![(String::from("Dupes"), activity)]);
        assert!(matches!(result, Err(RosterError::DuplicateSeedParticipant { .. })));
    }
}
