//! Built-in seed activities for a fresh registry.
//!
//! Nine after-school activities across sports, arts, and academics, each
//! with a couple of pre-enrolled participants. Used whenever the
//! configuration file does not supply its own `activities` list.

use crate::activity::Activity;
use crate::email::ParticipantEmail;
use crate::error::RosterError;

/// Helper to build a seeded `(name, Activity)` pair.
fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Result<(String, Activity), RosterError> {
    let mut record = Activity::new(description, schedule, max_participants);
    record.participants = participants
        .iter()
        .map(|raw| ParticipantEmail::parse(raw))
        .collect::<Result<_, _>>()?;
    Ok((name.to_owned(), record))
}

/// The default seed set, in display order.
///
/// # Errors
///
/// Returns [`RosterError::InvalidEmail`] if a seeded participant address
/// fails validation.
pub fn default_activities() -> Result<Vec<(String, Activity)>, RosterError> {
    Ok(vec![
        // --- Academic ---
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        )?,
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        )?,
        activity(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        )?,
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        )?,
        // --- Sports ---
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        )?,
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        )?,
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        )?,
        // --- Arts ---
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        )?,
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        )?,
    ])
}
