use anyhow::{Context, Result};
use calink_core::Provider;
use owo_colors::OwoColorize;

use super::Settings;
use crate::args::EventArgs;

pub fn run(provider: Provider, args: EventArgs, tz: Option<&str>) -> Result<()> {
    let settings = Settings::load(tz)?;
    let event = args.to_event()?;

    let link = settings.generator.link(provider, &event);
    let url = url::Url::parse(&link)
        .with_context(|| format!("Generated an invalid {} link", provider.display_name()))?;

    println!("Opening {}...\n", provider.display_name().bold());
    println!("{}\n", url);

    if open::that(url.as_str()).is_err() {
        println!("(Could not open browser automatically, please copy the URL above)");
    }

    Ok(())
}
