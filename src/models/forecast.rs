//! Forecast entity and request shapes for the weather endpoints.

use chrono::NaiveDate;
use paperclip::actix::Apiv2Schema;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Divisor used when deriving Fahrenheit from Celsius. Kept exactly as the
/// service has always emitted it so serialized values stay wire-compatible.
const FAHRENHEIT_DIVISOR: f64 = 0.5556;

/// A single day's predicted weather.
///
/// The Fahrenheit reading is derived from the Celsius value at serialization
/// time; it is never stored on the struct.
#[derive(Clone, Debug, PartialEq, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// The date the forecast applies to
    pub date: NaiveDate,
    /// Temperature in Celsius
    pub temperature_c: i32,
    /// Descriptive conditions label
    pub summary: Option<String>,
}

impl Forecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    /// Temperature in Fahrenheit, recomputed from the Celsius value on every
    /// call.
    pub fn temperature_f(&self) -> i32 {
        32 + (f64::from(self.temperature_c) / FAHRENHEIT_DIVISOR).floor() as i32
    }
}

impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Forecast", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}

/// Query parameters for the forecast listing endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ForecastQuery {
    /// Number of days to forecast (1-14, defaults to 5)
    pub days: Option<i32>,
}

/// Request body for creating a forecast
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct CreateForecastRequest {
    /// The date the forecast applies to
    pub date: Option<NaiveDate>,
    /// Temperature in Celsius
    #[serde(default)]
    pub temperature_c: i32,
    /// Descriptive conditions label
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn fahrenheit_is_derived_from_celsius() {
        let forecast = Forecast::new(date("2030-06-01"), 20, Some("Mild".to_string()));
        // 20 / 0.5556 = 35.99..., floored to 35
        assert_eq!(forecast.temperature_f(), 67);
    }

    #[test]
    fn fahrenheit_floors_negative_values() {
        let forecast = Forecast::new(date("2030-01-15"), -20, Some("Freezing".to_string()));
        // -20 / 0.5556 = -35.99..., floored to -36
        assert_eq!(forecast.temperature_f(), -4);
    }

    #[test]
    fn fahrenheit_of_zero_celsius_is_freezing_point() {
        let forecast = Forecast::new(date("2030-01-15"), 0, None);
        assert_eq!(forecast.temperature_f(), 32);
    }

    #[test]
    fn serialization_includes_derived_fahrenheit() {
        let forecast = Forecast::new(date("2030-06-01"), 25, Some("Warm".to_string()));
        let json = serde_json::to_value(&forecast).unwrap();

        assert_eq!(json["date"], "2030-06-01");
        assert_eq!(json["temperatureC"], 25);
        assert_eq!(json["temperatureF"], 32 + (25.0_f64 / 0.5556).floor() as i64);
        assert_eq!(json["summary"], "Warm");
    }

    #[test]
    fn serialization_emits_null_for_missing_summary() {
        let forecast = Forecast::new(date("2030-06-01"), 10, None);
        let json = serde_json::to_value(&forecast).unwrap();
        assert!(json["summary"].is_null());
    }

    #[test]
    fn deserialization_ignores_supplied_fahrenheit() {
        // A stored Fahrenheit value must never survive a round trip; only the
        // Celsius reading is authoritative.
        let forecast: Forecast = serde_json::from_str(
            r#"{"date": "2030-06-01", "temperatureC": 0, "temperatureF": 9999, "summary": "Cool"}"#,
        )
        .unwrap();

        assert_eq!(forecast.temperature_c, 0);
        assert_eq!(forecast.temperature_f(), 32);
    }

    #[test]
    fn create_request_defaults_missing_temperature_to_zero() {
        let request: CreateForecastRequest =
            serde_json::from_str(r#"{"date": "2030-06-01", "summary": "Cool"}"#).unwrap();
        assert_eq!(request.temperature_c, 0);
    }
}
