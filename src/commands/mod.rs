pub mod config;
pub mod form;
pub mod links;
pub mod open;

use std::fmt;

use anyhow::Result;
use calink_core::LinkGenerator;
use calink_core::config::{CalinkConfig, parse_zone};
use chrono_tz::Tz;

/// Where the zone for picker dates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSource {
    Flag,
    Config,
    System,
    UtcFallback,
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZoneSource::Flag => "--tz",
            ZoneSource::Config => "config",
            ZoneSource::System => "system",
            ZoneSource::UtcFallback => "UTC fallback",
        })
    }
}

/// Config file merged with command-line overrides.
pub struct Settings {
    pub config: CalinkConfig,
    pub generator: LinkGenerator,
    pub zone_source: ZoneSource,
}

impl Settings {
    pub fn load(tz: Option<&str>) -> Result<Self> {
        let config = CalinkConfig::load()?;
        let (zone, zone_source) = resolve_zone(tz, &config, system_zone)?;
        tracing::debug!(%zone, %zone_source, "reading dates as local time");

        Ok(Settings {
            config,
            generator: LinkGenerator::new(zone),
            zone_source,
        })
    }
}

/// Pick the zone for picker dates: `--tz`, then config, then the system zone.
fn resolve_zone(
    flag: Option<&str>,
    config: &CalinkConfig,
    system: impl FnOnce() -> Option<Tz>,
) -> Result<(Tz, ZoneSource)> {
    if let Some(name) = flag {
        return Ok((parse_zone(name)?, ZoneSource::Flag));
    }

    if let Some(zone) = config.zone()? {
        return Ok((zone, ZoneSource::Config));
    }

    match system() {
        Some(zone) => Ok((zone, ZoneSource::System)),
        None => {
            tracing::warn!("Could not determine system time zone, using UTC");
            Ok((Tz::UTC, ZoneSource::UtcFallback))
        }
    }
}

fn system_zone() -> Option<Tz> {
    let name = iana_time_zone::get_timezone().ok()?;
    match name.parse::<Tz>() {
        Ok(zone) => Some(zone),
        Err(_) => {
            tracing::debug!("System time zone '{}' is not a known IANA zone", name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let config = CalinkConfig {
            timezone: Some("Asia/Tokyo".into()),
            ..Default::default()
        };

        let resolved = resolve_zone(Some("Europe/Berlin"), &config, || None).unwrap();
        assert_eq!(resolved, (chrono_tz::Europe::Berlin, ZoneSource::Flag));
    }

    #[test]
    fn test_config_zone_used_without_flag() {
        let config = CalinkConfig {
            timezone: Some("Asia/Tokyo".into()),
            ..Default::default()
        };

        let resolved = resolve_zone(None, &config, || Some(Tz::UTC)).unwrap();
        assert_eq!(resolved, (chrono_tz::Asia::Tokyo, ZoneSource::Config));
    }

    #[test]
    fn test_bad_flag_is_error() {
        assert!(resolve_zone(Some("Nowhere/Special"), &CalinkConfig::default(), || None).is_err());
    }

    #[test]
    fn test_system_zone_used_without_flag_or_config() {
        let resolved =
            resolve_zone(None, &CalinkConfig::default(), || Some(chrono_tz::America::Denver))
                .unwrap();
        assert_eq!(resolved, (chrono_tz::America::Denver, ZoneSource::System));
        assert_eq!(resolved.1.to_string(), "system");
    }

    #[test]
    fn test_unknown_system_zone_falls_back_to_utc() {
        let resolved = resolve_zone(None, &CalinkConfig::default(), || None).unwrap();
        assert_eq!(resolved, (Tz::UTC, ZoneSource::UtcFallback));
        assert_eq!(resolved.1.to_string(), "UTC fallback");
    }
}
