use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Response formats the API can negotiate through the `Accept` header.
///
/// Only the JSON flavours can be decoded into typed models; the XML formats
/// are available through [`crate::Client::fetch_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    GeoJson,
    JsonLd,
    Dwml,
    Oxml,
    Cap,
    Atom,
}

impl Format {
    /// MIME type sent as the `Accept` header value.
    pub const fn mime(&self) -> &'static str {
        match self {
            Format::GeoJson => "application/geo+json",
            Format::JsonLd => "application/ld+json",
            Format::Dwml => "application/vnd.noaa.dwml+xml",
            Format::Oxml => "application/vnd.noaa.obs+xml",
            Format::Cap => "application/cap+xml",
            Format::Atom => "application/atom+xml",
        }
    }

    /// Short name used in settings files and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Format::GeoJson => "geojson",
            Format::JsonLd => "jsonld",
            Format::Dwml => "dwml",
            Format::Oxml => "oxml",
            Format::Cap => "cap",
            Format::Atom => "atom",
        }
    }

    pub const fn all() -> &'static [Format] {
        &[
            Format::GeoJson,
            Format::JsonLd,
            Format::Dwml,
            Format::Oxml,
            Format::Cap,
            Format::Atom,
        ]
    }

    pub const fn is_json(&self) -> bool {
        matches!(self, Format::GeoJson | Format::JsonLd)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format '{0}'. Supported formats: geojson, jsonld, dwml, oxml, cap, atom.")]
pub struct ParseFormatError(String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        Format::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == lower || f.mime() == lower)
            .ok_or_else(|| ParseFormatError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_as_str_roundtrip() {
        for format in Format::all() {
            let parsed: Format = format.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*format, parsed);
        }
    }

    #[test]
    fn parses_mime_strings_too() {
        assert_eq!("application/cap+xml".parse::<Format>(), Ok(Format::Cap));
        assert_eq!("GeoJSON".parse::<Format>(), Ok(Format::GeoJson));
    }

    #[test]
    fn unknown_format_error() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }

    #[test]
    fn default_is_geojson() {
        assert_eq!(Format::default().mime(), "application/geo+json");
    }
}
