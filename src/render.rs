//! Terminal and JSON rendering for generated links.

use calink_core::{GeneratedLinks, Provider};
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

/// Key used for a provider's link in JSON output.
pub fn json_key(provider: Provider) -> &'static str {
    match provider {
        Provider::Google => "googleCalendarLink",
        Provider::Outlook => "outlookCalendarLink",
        Provider::Yahoo => "yahooCalendarLink",
    }
}

/// One labelled block per provider, in the order given.
pub fn render_links(links: &GeneratedLinks, providers: &[Provider]) -> String {
    let mut lines = Vec::new();

    for provider in providers {
        lines.push(format!("  {}", provider.display_name().bold()));
        lines.push(format!("  {}", links.get(*provider)));
        lines.push(String::new());
    }
    lines.pop();

    lines.join("\n")
}

pub fn links_json(links: &GeneratedLinks, providers: &[Provider]) -> Value {
    let map: Map<String, Value> = providers
        .iter()
        .map(|p| (json_key(*p).to_string(), Value::String(links.get(*p).to_string())))
        .collect();

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calink_core::{EventDetails, generate_links};

    #[test]
    fn test_json_matches_core_serialization() {
        let links = generate_links(&EventDetails {
            title: Some("Launch".into()),
            ..Default::default()
        });

        assert_eq!(
            links_json(&links, &Provider::ALL),
            serde_json::to_value(&links).unwrap()
        );
    }

    #[test]
    fn test_json_respects_provider_filter() {
        let links = generate_links(&EventDetails::default());
        let json = links_json(&links, &[Provider::Yahoo]);

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["yahooCalendarLink"], links.yahoo_calendar_link.as_str());
    }

    #[test]
    fn test_render_lists_each_provider() {
        let links = generate_links(&EventDetails::default());
        let text = render_links(&links, &[Provider::Outlook, Provider::Google]);

        let outlook = text.find(&links.outlook_calendar_link).unwrap();
        let google = text.find(&links.google_calendar_link).unwrap();
        assert!(outlook < google);
        assert!(!text.contains(&links.yahoo_calendar_link));
    }
}
