//! Form session: the current event and the links derived from it.

use crate::event::{EventDetails, EventField};
use crate::links::{GeneratedLinks, LinkGenerator};
use crate::provider::Provider;

/// Hook invoked when an output field gains focus.
///
/// Front ends use this to make the link easy to copy (select it, print it
/// alone, put it on a clipboard, open it).
pub trait OutputFocus {
    fn on_focus(&mut self, provider: Provider, link: &str);
}

impl<F> OutputFocus for F
where
    F: FnMut(Provider, &str),
{
    fn on_focus(&mut self, provider: Provider, link: &str) {
        self(provider, link)
    }
}

/// Holds the form's event details and the generated links.
///
/// Both values are replaced wholesale on every change; links are recomputed
/// synchronously before `apply` returns.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    generator: LinkGenerator,
    event: EventDetails,
    links: GeneratedLinks,
    revision: u64,
}

impl FormSession {
    pub fn new(generator: LinkGenerator) -> Self {
        FormSession {
            generator,
            ..Default::default()
        }
    }

    pub fn event(&self) -> &EventDetails {
        &self.event
    }

    pub fn links(&self) -> &GeneratedLinks {
        &self.links
    }

    /// Number of changes applied since the form was opened.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set one field and recompute all links.
    pub fn apply(&mut self, field: EventField, value: impl Into<String>) -> &GeneratedLinks {
        let next = self.event.with_field(field, value);
        tracing::debug!(field = %field, revision = self.revision + 1, "form field changed");
        self.replace(next)
    }

    /// Swap in a whole new event and recompute all links.
    pub fn replace(&mut self, event: EventDetails) -> &GeneratedLinks {
        self.links = self.generator.generate(&event);
        self.event = event;
        self.revision += 1;
        &self.links
    }

    /// Hand the current link for `provider` to a focus hook.
    pub fn focus(&self, provider: Provider, hook: &mut impl OutputFocus) {
        hook.on_focus(provider, self.links.get(provider));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::generate_links;

    #[test]
    fn test_links_empty_before_first_change() {
        let session = FormSession::default();

        assert_eq!(session.revision(), 0);
        assert_eq!(session.links(), &GeneratedLinks::default());
        assert!(session.links().iter().all(|(_, link)| link.is_empty()));
    }

    #[test]
    fn test_apply_recomputes_links() {
        let mut session = FormSession::default();
        session.apply(EventField::Title, "Launch");
        session.apply(EventField::StartDate, "2024-01-15T12:00");

        assert_eq!(session.revision(), 2);
        assert_eq!(session.event().title.as_deref(), Some("Launch"));
        assert_eq!(session.links(), &generate_links(session.event()));
        assert!(session.links().google_calendar_link.contains("dates=20240115T120000Z&"));
    }

    #[test]
    fn test_apply_first_change_fills_all_links() {
        let mut session = FormSession::default();
        let links = session.apply(EventField::Location, "Lisbon").clone();

        assert!(links.iter().all(|(_, link)| link.starts_with("https://")));
        assert!(links.yahoo_calendar_link.contains("in_loc=Lisbon"));
    }

    #[test]
    fn test_replace_swaps_whole_event() {
        let mut session = FormSession::default();
        session.apply(EventField::Title, "Old");

        let event = EventDetails {
            description: Some("New".into()),
            ..Default::default()
        };
        session.replace(event.clone());

        assert_eq!(session.event(), &event);
        assert!(session.links().google_calendar_link.contains("text=&"));
    }

    #[test]
    fn test_focus_hands_link_to_hook() {
        let mut session = FormSession::default();
        session.apply(EventField::Title, "Demo");

        let mut focused = Vec::new();
        session.focus(Provider::Yahoo, &mut |provider: Provider, link: &str| {
            focused.push((provider, link.to_string()));
        });

        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].0, Provider::Yahoo);
        assert_eq!(focused[0].1, session.links().yahoo_calendar_link);
    }
}
