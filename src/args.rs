use std::path::PathBuf;

use anyhow::{Context, Result};
use calink_core::EventDetails;
use clap::Args;

/// Event details given on the command line.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Event title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Start date/time (e.g., "2025-03-20T15:00")
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date/time (e.g., "2025-03-20T16:00")
    #[arg(short, long)]
    pub end: Option<String>,

    /// Read event details from a JSON file (flags override its fields)
    #[arg(short = 'f', long)]
    pub event_file: Option<PathBuf>,
}

impl EventArgs {
    pub fn to_event(&self) -> Result<EventDetails> {
        let base = match &self.event_file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read event file {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("Could not parse event file {}", path.display()))?
            }
            None => EventDetails::default(),
        };

        let flags = EventDetails {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start_date: self.start.clone(),
            end_date: self.end.clone(),
        };

        Ok(base.merged_with(&flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_only() {
        let args = EventArgs {
            title: Some("Standup".into()),
            start: Some("2024-01-15T09:00".into()),
            ..Default::default()
        };

        let event = args.to_event().unwrap();
        assert_eq!(event.title.as_deref(), Some("Standup"));
        assert_eq!(event.start_date.as_deref(), Some("2024-01-15T09:00"));
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn test_flags_override_event_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(
            &path,
            r#"{"title":"From file","location":"Oslo","endDate":"2024-01-15T13:00"}"#,
        )
        .unwrap();

        let args = EventArgs {
            title: Some("From flag".into()),
            event_file: Some(path),
            ..Default::default()
        };

        let event = args.to_event().unwrap();
        assert_eq!(event.title.as_deref(), Some("From flag"));
        assert_eq!(event.location.as_deref(), Some("Oslo"));
        assert_eq!(event.end_date.as_deref(), Some("2024-01-15T13:00"));
    }

    #[test]
    fn test_missing_event_file_is_error() {
        let args = EventArgs {
            event_file: Some(PathBuf::from("/nonexistent/calink/event.json")),
            ..Default::default()
        };

        assert!(args.to_event().is_err());
    }
}
