use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{CustomType, Select, Text};
use nws_core::{
    AlertQuery, Client, Coordinate, Endpoint, Format, ZoneType, models::AlertSeverity,
};
use tracing::debug;

use crate::{output, settings::Settings};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nws", version, about = "National Weather Service CLI")]
pub struct Cli {
    /// User-Agent for this invocation only; overrides the saved setting.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the User-Agent, base URL, format and timeout.
    Configure,

    /// Show the forecast grid and zones for a coordinate.
    Point {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },

    /// Show the forecast for a coordinate.
    Forecast {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,

        /// Hourly periods instead of 12-hour ones.
        #[arg(long)]
        hourly: bool,
    },

    /// List observation stations near a coordinate.
    Stations {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },

    /// Show the latest observation from a station, e.g. "KMHK".
    Observation {
        station: String,

        /// Show every observation from the last N hours instead.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hours: Option<u32>,
    },

    /// List active alerts.
    Alerts {
        /// State or marine area code, e.g. "KS".
        #[arg(long)]
        area: Option<String>,

        /// Zone identifier, e.g. "KSZ035".
        #[arg(long)]
        zone: Option<String>,

        #[arg(long, value_enum)]
        severity: Option<Severity>,

        #[arg(long)]
        limit: Option<u32>,

        /// Include expired and cancelled alerts.
        #[arg(long)]
        all: bool,
    },

    /// Count active alerts by area.
    AlertCount,

    /// Show a zone, or its text forecast.
    Zone {
        /// land, marine, forecast, public, coastal, offshore, fire or county.
        zone_type: ZoneType,
        id: String,

        #[arg(long)]
        forecast: bool,
    },

    /// Show a forecast office, or its headlines.
    Office {
        /// Office identifier, e.g. "TOP".
        id: String,

        #[arg(long)]
        headlines: bool,
    },

    /// Print the undecoded body of any API path or URL.
    Raw {
        /// e.g. "/alerts/active/area/KS".
        path: String,

        /// geojson, jsonld, dwml, oxml, cap or atom; defaults to the saved format.
        #[arg(long)]
        format: Option<Format>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    Unknown,
}

impl From<Severity> for AlertSeverity {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Extreme => AlertSeverity::Extreme,
            Severity::Severe => AlertSeverity::Severe,
            Severity::Moderate => AlertSeverity::Moderate,
            Severity::Minor => AlertSeverity::Minor,
            Severity::Unknown => AlertSeverity::Unknown,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = Settings::load()?;

        let mut client = Client::new(settings.to_configuration());
        if let Some(user_agent) = self.user_agent {
            client.set_user_agent(user_agent);
        }
        debug!(config = ?client.configuration(), "client ready");

        let text = match self.command {
            Command::Configure => return configure(settings),
            Command::Point { lat, lon } => {
                let point = client
                    .points()
                    .point(Coordinate::new(lat, lon))
                    .await
                    .context("Failed to look up point")?;
                output::point(&point)
            }
            Command::Forecast { lat, lon, hourly } => {
                let forecasts = client.forecasts();
                let here = Coordinate::new(lat, lon);
                let forecast = if hourly {
                    forecasts.hourly_forecast_for_point(here).await
                } else {
                    forecasts.forecast_for_point(here).await
                }
                .context("Failed to fetch forecast")?;
                output::forecast(&forecast)
            }
            Command::Stations { lat, lon } => {
                let stations = client
                    .stations()
                    .stations_for_point(Coordinate::new(lat, lon))
                    .await
                    .context("Failed to fetch stations")?;
                output::stations(&stations)
            }
            Command::Observation { station, hours } => {
                let observations = client.observations();
                match hours {
                    Some(hours) => {
                        let (start, end) = observation_window(Utc::now(), hours)?;
                        let recent = observations
                            .between(&station, start, end)
                            .await
                            .with_context(|| format!("Failed to fetch observations for {station}"))?;
                        recent
                            .items()
                            .map(output::observation)
                            .collect::<Vec<_>>()
                            .join("\n")
                    }
                    None => {
                        let latest = observations
                            .latest(&station)
                            .await
                            .with_context(|| format!("Failed to fetch observation for {station}"))?;
                        output::observation(&latest.properties)
                    }
                }
            }
            Command::Alerts {
                area,
                zone,
                severity,
                limit,
                all,
            } => {
                let mut query = AlertQuery::new();
                if let Some(area) = area {
                    query = query.area(area);
                }
                if let Some(zone) = zone {
                    query = query.zone(zone);
                }
                if let Some(severity) = severity {
                    query = query.severity(severity.into());
                }
                if let Some(limit) = limit {
                    query = query.limit(limit);
                }

                let alerts = if all {
                    client.alerts().alerts(query).await
                } else {
                    client.alerts().active(query).await
                }
                .context("Failed to fetch alerts")?;
                output::alerts(&alerts)
            }
            Command::AlertCount => {
                let count = client
                    .alerts()
                    .active_count()
                    .await
                    .context("Failed to fetch alert count")?;
                output::alert_count(&count)
            }
            Command::Zone {
                zone_type,
                id,
                forecast,
            } => {
                let zones = client.zones();
                if forecast {
                    let forecast = zones
                        .forecast(zone_type, &id)
                        .await
                        .with_context(|| format!("Failed to fetch forecast for zone {id}"))?;
                    output::zone_forecast(&forecast)
                } else {
                    let zone = zones
                        .zone(zone_type, &id)
                        .await
                        .with_context(|| format!("Failed to fetch zone {id}"))?;
                    output::zone(&zone)
                }
            }
            Command::Office { id, headlines } => {
                let offices = client.offices();
                if headlines {
                    let headlines = offices
                        .headlines(&id)
                        .await
                        .with_context(|| format!("Failed to fetch headlines for {id}"))?;
                    output::headlines(&headlines)
                } else {
                    let office = offices
                        .office(&id)
                        .await
                        .with_context(|| format!("Failed to fetch office {id}"))?;
                    output::office(&office)
                }
            }
            Command::Raw { path, format } => {
                let endpoint = Endpoint::linked(&path)?;
                let body = client
                    .fetch_raw(&endpoint, format)
                    .await
                    .with_context(|| format!("Failed to fetch {path}"))?;
                String::from_utf8_lossy(&body).into_owned()
            }
        };

        print!("{text}");
        Ok(())
    }
}

/// `[now - hours, now]`, or an error when the start falls outside the
/// representable date range.
fn observation_window(now: DateTime<Utc>, hours: u32) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let start = TimeDelta::try_hours(i64::from(hours))
        .and_then(|span| now.checked_sub_signed(span))
        .ok_or_else(|| anyhow!("--hours {hours} reaches too far into the past"))?;

    Ok((start, now))
}

/// Typed commands decode JSON, so only JSON formats can be the default.
fn default_format_choices() -> Vec<Format> {
    Format::all().iter().copied().filter(Format::is_json).collect()
}

fn configure(mut settings: Settings) -> Result<()> {
    let current_agent = settings
        .user_agent
        .clone()
        .unwrap_or_else(|| nws_core::config::DEFAULT_USER_AGENT.to_string());
    let user_agent = Text::new("User-Agent:")
        .with_default(&current_agent)
        .with_help_message("api.weather.gov asks for contact info, e.g. (myapp, me@example.com)")
        .prompt()
        .context("Failed to read User-Agent")?;

    let current_base = settings
        .base_url
        .clone()
        .unwrap_or_else(|| nws_core::config::DEFAULT_BASE_URL.to_string());
    let base_url = Text::new("Base URL:")
        .with_default(&current_base)
        .prompt()
        .context("Failed to read base URL")?;

    let formats = default_format_choices();
    let cursor = settings
        .format
        .and_then(|f| formats.iter().position(|x| *x == f))
        .unwrap_or(0);
    let format = Select::new("Default format:", formats)
        .with_starting_cursor(cursor)
        .with_help_message("XML formats stay available per call via `nws raw --format`")
        .prompt()
        .context("Failed to read format")?;

    let timeout_secs = CustomType::<u64>::new("Timeout (seconds):")
        .with_default(
            settings
                .timeout_secs
                .unwrap_or(nws_core::config::DEFAULT_TIMEOUT.as_secs()),
        )
        .prompt()
        .context("Failed to read timeout")?;

    settings.user_agent = Some(user_agent);
    settings.base_url = Some(base_url);
    settings.format = Some(format);
    settings.timeout_secs = Some(timeout_secs);

    let path = settings.save()?;
    println!("Settings saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from(["nws", "forecast", "39.7456", "-97.0892", "--hourly"])
            .expect("valid args");

        match cli.command {
            Command::Forecast { lat, lon, hourly } => {
                assert_eq!((lat, lon), (39.7456, -97.0892));
                assert!(hourly);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_user_agent_after_subcommand() {
        let cli = Cli::try_parse_from(["nws", "alert-count", "--user-agent", "(ci, ci@example.com)"])
            .expect("valid args");

        assert_eq!(cli.user_agent.as_deref(), Some("(ci, ci@example.com)"));
    }

    #[test]
    fn zone_type_and_format_parse_via_from_str() {
        let cli = Cli::try_parse_from(["nws", "zone", "public", "KSZ035", "--forecast"])
            .expect("valid args");
        assert!(matches!(
            cli.command,
            Command::Zone { zone_type: ZoneType::Public, forecast: true, .. }
        ));

        let cli = Cli::try_parse_from(["nws", "raw", "/alerts/active", "--format", "cap"])
            .expect("valid args");
        assert!(matches!(cli.command, Command::Raw { format: Some(Format::Cap), .. }));

        assert!(Cli::try_parse_from(["nws", "zone", "public_marine", "X"]).is_err());
    }

    #[test]
    fn hours_must_be_positive() {
        assert!(Cli::try_parse_from(["nws", "observation", "KMHK", "--hours", "0"]).is_err());
        assert!(Cli::try_parse_from(["nws", "observation", "KMHK", "--hours", "-3"]).is_err());
        assert!(
            Cli::try_parse_from(["nws", "observation", "KMHK", "--hours", "9223372036854775807"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["nws", "observation", "KMHK", "--hours", "6"])
            .expect("valid args");
        assert!(matches!(cli.command, Command::Observation { hours: Some(6), .. }));
    }

    #[test]
    fn observation_window_spans_requested_hours() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let (start, end) = observation_window(now, 6).expect("in range");

        assert_eq!(end, now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap());
    }

    #[test]
    fn observation_window_out_of_range_is_an_error() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let err = observation_window(now, u32::MAX).unwrap_err();

        assert!(err.to_string().contains("too far into the past"));
    }

    #[test]
    fn default_format_choices_are_decodable() {
        let choices = default_format_choices();

        assert_eq!(choices, [Format::GeoJson, Format::JsonLd]);
        assert!(choices.iter().all(Format::is_json));
    }

    #[test]
    fn severity_maps_to_alert_severity() {
        let cli = Cli::try_parse_from(["nws", "alerts", "--area", "KS", "--severity", "severe"])
            .expect("valid args");

        match cli.command {
            Command::Alerts { severity, area, .. } => {
                assert_eq!(severity.map(AlertSeverity::from), Some(AlertSeverity::Severe));
                assert_eq!(area.as_deref(), Some("KS"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
