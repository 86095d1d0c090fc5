use serde::{Deserialize, Serialize};

use super::{Feature, QuantitativeValue, Timestamp};

/// Forecast for a grid cell, either the 12-hour or the hourly variant.
pub type Forecast = Feature<ForecastProperties>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastProperties {
    pub units: String,
    #[serde(default)]
    pub forecast_generator: Option<String>,
    pub generated_at: Timestamp,
    pub update_time: Timestamp,
    /// ISO-8601 interval, e.g. `2024-03-01T18:00:00+00:00/P7DT7H`.
    pub valid_times: String,
    #[serde(default)]
    pub elevation: Option<QuantitativeValue>,
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub number: u32,
    /// "Tonight", "Saturday", ...; empty for hourly periods.
    pub name: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub is_daytime: bool,
    pub temperature: i32,
    pub temperature_unit: String,
    #[serde(default)]
    pub temperature_trend: Option<String>,
    #[serde(default)]
    pub probability_of_precipitation: Option<QuantitativeValue>,
    #[serde(default)]
    pub dewpoint: Option<QuantitativeValue>,
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValue>,
    pub wind_speed: String,
    pub wind_direction: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) const FORECAST_TOP: &str = r#"{
        "type": "Feature",
        "properties": {
            "units": "us",
            "forecastGenerator": "BaselineForecastGenerator",
            "generatedAt": "2024-03-01T21:13:02+00:00",
            "updateTime": "2024-03-01T19:32:51+00:00",
            "validTimes": "2024-03-01T13:00:00+00:00/P7DT12H",
            "elevation": {"unitCode": "wmoUnit:m", "value": 441.96},
            "periods": [
                {
                    "number": 1,
                    "name": "Tonight",
                    "startTime": "2024-03-01T15:00:00-06:00",
                    "endTime": "2024-03-02T06:00:00-06:00",
                    "isDaytime": false,
                    "temperature": 37,
                    "temperatureUnit": "F",
                    "temperatureTrend": null,
                    "probabilityOfPrecipitation": {"unitCode": "wmoUnit:percent", "value": null},
                    "windSpeed": "5 to 10 mph",
                    "windDirection": "S",
                    "icon": "https://api.weather.gov/icons/land/night/few?size=medium",
                    "shortForecast": "Mostly Clear",
                    "detailedForecast": "Mostly clear, with a low around 37."
                },
                {
                    "number": 2,
                    "name": "Saturday",
                    "startTime": "2024-03-02T06:00:00-06:00",
                    "endTime": "2024-03-02T18:00:00-06:00",
                    "isDaytime": true,
                    "temperature": 68,
                    "temperatureUnit": "F",
                    "temperatureTrend": "",
                    "probabilityOfPrecipitation": {"unitCode": "wmoUnit:percent", "value": 20},
                    "windSpeed": "10 to 15 mph",
                    "windDirection": "SW",
                    "icon": "https://api.weather.gov/icons/land/day/sct?size=medium",
                    "shortForecast": "Mostly Sunny",
                    "detailedForecast": "Mostly sunny, with a high near 68."
                }
            ]
        }
    }"#;
}
