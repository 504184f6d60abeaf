use anyhow::Result;
use calink_core::Provider;
use calink_core::config::OutputFormat;

use super::Settings;
use crate::args::EventArgs;
use crate::render::{links_json, render_links};

pub fn run(args: EventArgs, providers: Vec<Provider>, tz: Option<&str>, json: bool) -> Result<()> {
    let settings = Settings::load(tz)?;
    let event = args.to_event()?;

    let providers = if providers.is_empty() {
        settings.config.providers.clone()
    } else {
        providers
    };

    let links = settings.generator.generate(&event);

    if json || settings.config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&links_json(&links, &providers))?);
    } else {
        println!("{}", render_links(&links, &providers));
    }

    Ok(())
}
