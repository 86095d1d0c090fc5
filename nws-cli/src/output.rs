//! Human-readable rendering of API responses.

use nws_core::models::{
    AlertCollection, AlertCount, Forecast, HeadlineCollection, ObservationProperties, Office,
    Point, QuantitativeValue, StationCollection, Zone, ZoneForecast,
};
use std::fmt::Write;

pub fn point(point: &Point) -> String {
    let p = &point.properties;
    let mut out = String::new();

    let _ = writeln!(out, "Grid:       {}", p.grid_ref());
    let _ = writeln!(out, "Time zone:  {}", p.time_zone);
    if let Some(zone) = &p.forecast_zone {
        let _ = writeln!(out, "Zone:       {}", last_segment(zone));
    }
    if let Some(county) = &p.county {
        let _ = writeln!(out, "County:     {}", last_segment(county));
    }
    if let Some(radar) = &p.radar_station {
        let _ = writeln!(out, "Radar:      {radar}");
    }

    out
}

pub fn forecast(forecast: &Forecast) -> String {
    let mut out = String::new();

    for period in &forecast.properties.periods {
        let label = if period.name.is_empty() {
            period.start_time.format("%a %H:%M").to_string()
        } else {
            period.name.clone()
        };

        let _ = writeln!(
            out,
            "{label:<16} {:>4}°{}  {:>12} {:<3}  {}",
            period.temperature,
            period.temperature_unit,
            period.wind_speed,
            period.wind_direction,
            period.short_forecast
        );
    }

    out
}

pub fn stations(stations: &StationCollection) -> String {
    let mut out = String::new();

    for station in stations.items() {
        let _ = writeln!(out, "{:<6} {}", station.station_identifier, station.name);
    }
    if stations.is_empty() {
        out.push_str("No stations.\n");
    }

    out
}

pub fn observation(obs: &ObservationProperties) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Observed:   {}", obs.timestamp.to_rfc2822());
    if let Some(text) = &obs.text_description {
        let _ = writeln!(out, "Conditions: {text}");
    }
    let _ = writeln!(out, "Temp:       {}", quantity(&obs.temperature));
    let _ = writeln!(out, "Dewpoint:   {}", quantity(&obs.dewpoint));
    let _ = writeln!(out, "Humidity:   {}", quantity(&obs.relative_humidity));
    let _ = writeln!(
        out,
        "Wind:       {} from {}",
        quantity(&obs.wind_speed),
        quantity(&obs.wind_direction)
    );

    out
}

pub fn alerts(alerts: &AlertCollection) -> String {
    if alerts.is_empty() {
        return "No alerts.\n".to_string();
    }

    let mut out = String::new();
    for alert in alerts.items() {
        let _ = writeln!(out, "[{}] {}", alert.severity.as_str(), alert.event);
        if let Some(headline) = &alert.headline {
            let _ = writeln!(out, "  {headline}");
        }
        let _ = writeln!(out, "  Area:    {}", alert.area_desc);
        let _ = writeln!(out, "  Expires: {}", alert.expires.to_rfc2822());
    }

    out
}

pub fn alert_count(count: &AlertCount) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total:  {}", count.total);
    let _ = writeln!(out, "Land:   {}", count.land);
    let _ = writeln!(out, "Marine: {}", count.marine);
    for (area, n) in &count.areas {
        let _ = writeln!(out, "  {area:<4} {n}");
    }

    out
}

pub fn zone(zone: &Zone) -> String {
    let z = &zone.properties;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({}, {})", z.name, z.id, z.kind);
    if let Some(state) = &z.state {
        let _ = writeln!(out, "State:   {state}");
    }
    if !z.cwa.is_empty() {
        let _ = writeln!(out, "Offices: {}", z.cwa.join(", "));
    }

    out
}

pub fn zone_forecast(forecast: &ZoneForecast) -> String {
    let mut out = String::new();

    for period in &forecast.properties.periods {
        let _ = writeln!(out, "{}: {}", period.name, period.detailed_forecast);
    }

    out
}

pub fn office(office: &Office) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", office.name, office.id);
    if let Some(address) = &office.address {
        let parts: Vec<&str> = [
            &address.street_address,
            &address.address_locality,
            &address.address_region,
            &address.postal_code,
        ]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .collect();
        let _ = writeln!(out, "Address: {}", parts.join(", "));
    }
    if let Some(phone) = &office.telephone {
        let _ = writeln!(out, "Phone:   {phone}");
    }
    if let Some(email) = &office.email {
        let _ = writeln!(out, "Email:   {email}");
    }

    out
}

pub fn headlines(headlines: &HeadlineCollection) -> String {
    if headlines.headlines.is_empty() {
        return "No headlines.\n".to_string();
    }

    let mut out = String::new();
    for headline in &headlines.headlines {
        let marker = if headline.important { "!" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {}  {}",
            headline.issuance_time.format("%Y-%m-%d %H:%M"),
            headline.title
        );
    }

    out
}

/// Value with a readable unit, or "n/a" when the station did not report it.
fn quantity(value: &Option<QuantitativeValue>) -> String {
    let Some(q) = value else {
        return "n/a".to_string();
    };
    let Some(v) = q.value else {
        return "n/a".to_string();
    };

    let unit = match q.unit_code.as_deref().map(|u| u.trim_start_matches("wmoUnit:")) {
        Some("degC") => "°C",
        Some("degF") => "°F",
        Some("percent") => "%",
        Some("km_h-1") => " km/h",
        Some("m_s-1") => " m/s",
        Some("degree_(angle)") => "°",
        Some("Pa") => " Pa",
        Some("m") => " m",
        Some("mm") => " mm",
        _ => "",
    };

    format!("{v:.1}{unit}")
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
