//! Event details as entered on the form.
//!
//! Every field is optional. An `EventDetails` value is never edited in place:
//! changing a field produces a new value, which is then fed to the link
//! generator as a whole.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// The details of an event, as typed by the user.
///
/// Dates are kept as the raw strings produced by a date-time picker
/// (`YYYY-MM-DDTHH:mm`); they are only interpreted when links are generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One of the five input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Title,
    Description,
    Location,
    StartDate,
    EndDate,
}

impl EventField {
    /// All fields, in the order the form presents them.
    pub const ALL: [EventField; 5] = [
        EventField::Title,
        EventField::Description,
        EventField::Location,
        EventField::StartDate,
        EventField::EndDate,
    ];

    /// The field's name as used by the form and in event files.
    pub fn name(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::Description => "description",
            EventField::Location => "location",
            EventField::StartDate => "startDate",
            EventField::EndDate => "endDate",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            EventField::Title => "Event Title",
            EventField::Description => "Event Description",
            EventField::Location => "Event Location",
            EventField::StartDate => "Event Start Date",
            EventField::EndDate => "Event End Date",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, EventField::StartDate | EventField::EndDate)
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventField {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LinkError::UnknownField(s.to_string()))
    }
}

impl EventDetails {
    pub fn get(&self, field: EventField) -> Option<&str> {
        match field {
            EventField::Title => self.title.as_deref(),
            EventField::Description => self.description.as_deref(),
            EventField::Location => self.location.as_deref(),
            EventField::StartDate => self.start_date.as_deref(),
            EventField::EndDate => self.end_date.as_deref(),
        }
    }

    /// Return a copy of this event with one field replaced.
    ///
    /// An empty value clears the field.
    pub fn with_field(&self, field: EventField, value: impl Into<String>) -> EventDetails {
        let value = value.into();
        let value = if value.is_empty() { None } else { Some(value) };

        let mut next = self.clone();
        match field {
            EventField::Title => next.title = value,
            EventField::Description => next.description = value,
            EventField::Location => next.location = value,
            EventField::StartDate => next.start_date = value,
            EventField::EndDate => next.end_date = value,
        }
        next
    }

    /// Overlay the fields that are set in `other` on top of this event.
    pub fn merged_with(&self, other: &EventDetails) -> EventDetails {
        EventField::ALL.into_iter().fold(self.clone(), |event, field| {
            match other.get(field) {
                Some(value) => event.with_field(field, value),
                None => event,
            }
        })
    }
}
