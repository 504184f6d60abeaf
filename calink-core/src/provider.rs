//! Calendar providers and their "add event" URL templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encode::encode_component;
use crate::error::LinkError;
use crate::timestamp::EventTimestamp;

const GOOGLE_BASE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
const OUTLOOK_BASE: &str = "https://outlook.live.com/owa/?path=/calendar/action/compose&rru=addevent";
const YAHOO_BASE: &str = "https://calendar.yahoo.com/";
const YAHOO_VERSION: u32 = 60;

/// A calendar web application that accepts event details via URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Outlook,
    Yahoo,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Google, Provider::Outlook, Provider::Yahoo];

    pub fn id(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Outlook => "outlook",
            Provider::Yahoo => "yahoo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Google => "Google Calendar",
            Provider::Outlook => "Outlook Calendar",
            Provider::Yahoo => "Yahoo Calendar",
        }
    }

    /// Assemble this provider's link from already-encoded parts.
    pub fn build(&self, parts: &LinkParts) -> String {
        match self {
            Provider::Google => google_link(parts),
            Provider::Outlook => outlook_link(parts),
            Provider::Yahoo => yahoo_link(parts),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LinkError::UnknownProvider(s.to_string()))
    }
}

/// Event fields prepared for substitution into a URL template.
///
/// Text fields are already percent-encoded; dates are resolved instants or
/// `None` when absent or unparsable.
#[derive(Debug, Clone, Default)]
pub struct LinkParts {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: Option<EventTimestamp>,
    pub end: Option<EventTimestamp>,
}

impl LinkParts {
    fn compact_start(&self) -> String {
        self.start.as_ref().map(EventTimestamp::compact).unwrap_or_default()
    }

    fn compact_end(&self) -> String {
        self.end.as_ref().map(EventTimestamp::compact).unwrap_or_default()
    }
}

/// `dates` is always present; the `%2F` separator only appears with an end date.
fn google_link(parts: &LinkParts) -> String {
    let separator = if parts.end.is_some() { "%2F" } else { "" };

    format!(
        "{GOOGLE_BASE}&text={}&dates={}{}{}&details={}&location={}",
        parts.title,
        parts.compact_start(),
        separator,
        parts.compact_end(),
        parts.description,
        parts.location,
    )
}

/// Outlook takes the picker value itself rather than a compact timestamp.
fn outlook_link(parts: &LinkParts) -> String {
    let raw = |ts: &Option<EventTimestamp>| {
        encode_component(ts.as_ref().map(|t| t.raw.as_str()))
    };

    format!(
        "{OUTLOOK_BASE}&subject={}&startdt={}&enddt={}&body={}&location={}",
        parts.title,
        raw(&parts.start),
        raw(&parts.end),
        parts.description,
        parts.location,
    )
}

/// `dur` is always emitted empty; `et` and `st` only appear when their date does.
fn yahoo_link(parts: &LinkParts) -> String {
    let end = match &parts.end {
        Some(_) => format!("&et={}", parts.compact_end()),
        None => String::new(),
    };
    let start = match &parts.start {
        Some(_) => format!("&st={}", parts.compact_start()),
        None => String::new(),
    };

    format!(
        "{YAHOO_BASE}?desc={}&dur={}&in_loc={}{}&title={}&v={YAHOO_VERSION}",
        parts.description, end, parts.location, start, parts.title,
    )
}
