use anyhow::Result;
use calink_core::config::CalinkConfig;
use owo_colors::OwoColorize;

use super::Settings;

pub fn run(init: bool) -> Result<()> {
    let config_path = CalinkConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            CalinkConfig::create_default_config(&config_path)?;
            println!("{}", format!("Created {}", config_path.display()).green());
        }
        println!();
    }

    let settings = Settings::load(None)?;
    let providers: Vec<&str> = settings.config.providers.iter().map(|p| p.id()).collect();

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!(
        "  Time zone:  {} {}",
        settings.generator.zone(),
        format!("({})", settings.zone_source).dimmed()
    );
    println!("  Providers:  {}", providers.join(", "));
    println!("  Format:     {}", settings.config.format);

    Ok(())
}
