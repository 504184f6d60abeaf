//! Link generation: event details in, one "add event" URL per provider out.

use chrono_tz::Tz;
use serde::Serialize;

use crate::encode::encode_component;
use crate::event::EventDetails;
use crate::provider::{LinkParts, Provider};
use crate::timestamp::EventTimestamp;

/// The three provider links derived from one `EventDetails` value.
///
/// Always recomputed as a whole; before the first computation every link is
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedLinks {
    pub google_calendar_link: String,
    pub outlook_calendar_link: String,
    pub yahoo_calendar_link: String,
}

impl GeneratedLinks {
    pub fn get(&self, provider: Provider) -> &str {
        match provider {
            Provider::Google => &self.google_calendar_link,
            Provider::Outlook => &self.outlook_calendar_link,
            Provider::Yahoo => &self.yahoo_calendar_link,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Provider, &str)> {
        Provider::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// Builds provider links, reading picker dates as wall-clock time in `zone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGenerator {
    zone: Tz,
}

impl Default for LinkGenerator {
    fn default() -> Self {
        LinkGenerator { zone: Tz::UTC }
    }
}

impl LinkGenerator {
    pub fn new(zone: Tz) -> Self {
        LinkGenerator { zone }
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn generate(&self, event: &EventDetails) -> GeneratedLinks {
        let parts = self.parts(event);

        GeneratedLinks {
            google_calendar_link: Provider::Google.build(&parts),
            outlook_calendar_link: Provider::Outlook.build(&parts),
            yahoo_calendar_link: Provider::Yahoo.build(&parts),
        }
    }

    /// Build the link for a single provider.
    pub fn link(&self, provider: Provider, event: &EventDetails) -> String {
        provider.build(&self.parts(event))
    }

    fn parts(&self, event: &EventDetails) -> LinkParts {
        LinkParts {
            title: encode_component(event.title.as_deref()),
            description: encode_component(event.description.as_deref()),
            location: encode_component(event.location.as_deref()),
            start: EventTimestamp::resolve(event.start_date.as_deref(), self.zone),
            end: EventTimestamp::resolve(event.end_date.as_deref(), self.zone),
        }
    }
}

/// Generate all three links, reading dates as UTC.
pub fn generate_links(event: &EventDetails) -> GeneratedLinks {
    LinkGenerator::default().generate(event)
}
