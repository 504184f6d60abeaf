use anyhow::Result;
use calink_core::timestamp::parse_local;
use calink_core::{EventField, FormSession, OutputFocus, Provider};
use chrono_tz::Tz;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use super::Settings;
use crate::render::render_links;

/// Prints the focused link on a line of its own so it can be copied whole.
struct PrintLink;

impl OutputFocus for PrintLink {
    fn on_focus(&mut self, provider: Provider, link: &str) {
        println!();
        println!("  {}", provider.display_name().dimmed());
        println!("{}", link);
        println!();
    }
}

pub fn run(tz: Option<&str>) -> Result<()> {
    let settings = Settings::load(tz)?;
    let zone = settings.generator.zone();
    let providers = settings.config.providers.clone();
    let mut session = FormSession::new(settings.generator);

    println!("{}", "Add To Calendar Link Generator".bold());
    println!(
        "{}",
        format!("  Dates are read as {} time. Leave a field empty to skip it.", zone).dimmed()
    );
    println!();

    for field in EventField::ALL {
        let value = prompt_field(field, zone)?;
        session.apply(field, value);

        println!();
        println!("{}", render_links(session.links(), &providers));
        println!();
    }

    if providers.is_empty() {
        return Ok(());
    }

    let mut items: Vec<&str> = providers.iter().map(|p| p.display_name()).collect();
    items.push("Done");

    let mut hook = PrintLink;
    loop {
        let selection = Select::new()
            .with_prompt("  Copy a link")
            .items(&items)
            .default(0)
            .interact()?;

        match providers.get(selection) {
            Some(provider) => session.focus(*provider, &mut hook),
            None => break,
        }
    }

    Ok(())
}

fn prompt_field(field: EventField, zone: Tz) -> Result<String> {
    let prompt = if field.is_date() {
        format!("  {} (YYYY-MM-DDTHH:mm)", field.label())
    } else {
        format!("  {}", field.label())
    };

    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(move |input: &String| -> Result<(), String> {
            if field.is_date() && !input.trim().is_empty() {
                parse_local(input, zone).map(|_| ()).map_err(|e| e.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(value)
}
