// Seed catalog module
// Loads the fixed activity catalog from a TOML file at process start

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::types::Activity;
use crate::logger;

/// Default catalog compiled into the binary, used when no seed file is
/// present on disk.
const DEFAULT_CATALOG: &str = include_str!("../../activities.toml");

/// One activity entry as written in the seed file.
#[derive(Debug, Deserialize)]
struct SeedActivity {
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    #[serde(default)]
    participants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    activities: Vec<SeedActivity>,
}

/// Load and validate the activity catalog.
///
/// Reads `seed_path` when the file exists, otherwise falls back to the
/// embedded default catalog. The catalog is fixed for the process
/// lifetime; validation failures abort startup.
pub fn load_catalog(seed_path: &str) -> Result<HashMap<String, Activity>, String> {
    let content = if Path::new(seed_path).exists() {
        logger::log_seed_source(seed_path);
        fs::read_to_string(seed_path)
            .map_err(|e| format!("Failed to read seed file '{seed_path}': {e}"))?
    } else {
        logger::log_seed_source("built-in catalog");
        DEFAULT_CATALOG.to_string()
    };

    parse_catalog(&content)
}

/// Parse and validate a TOML seed document.
fn parse_catalog(content: &str) -> Result<HashMap<String, Activity>, String> {
    let seed: SeedFile =
        toml::from_str(content).map_err(|e| format!("Invalid seed catalog: {e}"))?;

    if seed.activities.is_empty() {
        return Err("Seed catalog contains no activities".to_string());
    }

    let mut catalog = HashMap::new();
    for entry in seed.activities {
        validate_entry(&entry)?;
        let previous = catalog.insert(
            entry.name.clone(),
            Activity {
                description: entry.description,
                schedule: entry.schedule,
                max_participants: entry.max_participants,
                participants: entry.participants,
            },
        );
        if previous.is_some() {
            return Err(format!("Duplicate activity name '{}'", entry.name));
        }
    }

    Ok(catalog)
}

fn validate_entry(entry: &SeedActivity) -> Result<(), String> {
    if entry.name.trim().is_empty() {
        return Err("Activity name must not be empty".to_string());
    }
    if entry.description.trim().is_empty() || entry.schedule.trim().is_empty() {
        return Err(format!(
            "Activity '{}' needs a description and a schedule",
            entry.name
        ));
    }
    if entry.max_participants == 0 {
        return Err(format!(
            "Activity '{}' must allow at least one participant",
            entry.name
        ));
    }
    if entry.participants.len() > entry.max_participants {
        return Err(format!(
            "Activity '{}' seeds {} participants but only allows {}",
            entry.name,
            entry.participants.len(),
            entry.max_participants
        ));
    }
    for (i, email) in entry.participants.iter().enumerate() {
        if entry.participants[..i].contains(email) {
            return Err(format!(
                "Activity '{}' lists {email} more than once",
                entry.name
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_parses_and_has_required_activities() {
        let catalog = parse_catalog(DEFAULT_CATALOG).unwrap();
        for name in ["Chess Club", "Programming Class", "Gym Class"] {
            let activity = catalog.get(name).unwrap_or_else(|| panic!("missing {name}"));
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
            assert!(activity.max_participants > 0);
            assert!(activity.participants.len() <= activity.max_participants);
        }
    }

    #[test]
    fn rejects_zero_capacity() {
        let toml = r#"
            [[activities]]
            name = "Broken"
            description = "d"
            schedule = "s"
            max_participants = 0
        "#;
        let err = parse_catalog(toml).unwrap_err();
        assert!(err.contains("at least one participant"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let toml = r#"
            [[activities]]
            name = "Twice"
            description = "d"
            schedule = "s"
            max_participants = 5

            [[activities]]
            name = "Twice"
            description = "d"
            schedule = "s"
            max_participants = 5
        "#;
        let err = parse_catalog(toml).unwrap_err();
        assert!(err.contains("Duplicate activity name"));
    }

    #[test]
    fn rejects_duplicate_participants() {
        let toml = r#"
            [[activities]]
            name = "Club"
            description = "d"
            schedule = "s"
            max_participants = 5
            participants = ["a@mergington.edu", "a@mergington.edu"]
        "#;
        let err = parse_catalog(toml).unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn rejects_overfull_seed() {
        let toml = r#"
            [[activities]]
            name = "Club"
            description = "d"
            schedule = "s"
            max_participants = 1
            participants = ["a@mergington.edu", "b@mergington.edu"]
        "#;
        let err = parse_catalog(toml).unwrap_err();
        assert!(err.contains("only allows 1"));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = parse_catalog("").unwrap_err();
        assert!(err.contains("no activities"));
    }

    #[test]
    fn participants_default_to_empty() {
        let toml = r#"
            [[activities]]
            name = "Fresh Club"
            description = "d"
            schedule = "s"
            max_participants = 10
        "#;
        let catalog = parse_catalog(toml).unwrap();
        assert!(catalog["Fresh Club"].participants.is_empty());
    }
}
