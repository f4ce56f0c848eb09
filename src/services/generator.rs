//! Pseudo-random forecast generation.

use crate::models::Forecast;
use crate::services::random::RandomSource;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

/// Fixed set of descriptive condition labels a generated forecast draws from.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Inclusive Celsius range for generated temperatures
const TEMPERATURE_MIN_C: i32 = -20;
const TEMPERATURE_MAX_C: i32 = 54;

/// Produces forecasts with uniformly drawn temperature and summary.
///
/// Temperature and summary are drawn independently per call; repeated calls
/// for the same date are unrelated.
#[derive(Clone)]
pub struct ForecastGenerator {
    random: Arc<dyn RandomSource>,
}

impl ForecastGenerator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Forecast for an explicit calendar date. Any date is acceptable; range
    /// limits are the caller's concern.
    pub fn for_date(&self, date: NaiveDate) -> Forecast {
        let temperature_c = self.random.int_in_range(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C);
        let summary = SUMMARIES[self.random.pick(SUMMARIES.len())];

        Forecast::new(date, temperature_c, Some(summary.to_string()))
    }

    /// Forecast for `today` plus a day offset.
    pub fn for_offset(&self, today: NaiveDate, offset: i64) -> Forecast {
        self.for_date(today + Duration::days(offset))
    }
}
