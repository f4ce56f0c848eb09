//! Forecast orchestration over validation and generation.

use crate::models::{ApiError, CreateForecastRequest, Forecast};
use crate::services::generator::ForecastGenerator;
use crate::services::validation;
use chrono::NaiveDate;

/// Smallest accepted `days` value for a listing request
pub const MIN_FORECAST_DAYS: i32 = 1;
/// Largest accepted `days` value for a listing request
pub const MAX_FORECAST_DAYS: i32 = 14;

/// Stateless orchestration behind the forecast endpoints.
///
/// Every operation is single-shot; the only shared state is the random
/// source inside the generator.
#[derive(Clone)]
pub struct ForecastService {
    generator: ForecastGenerator,
}

impl ForecastService {
    pub fn new(generator: ForecastGenerator) -> Self {
        Self { generator }
    }

    /// Generated forecasts for offsets 1..=days from `today`, in date order.
    pub fn list(&self, days: i32, today: NaiveDate) -> Result<Vec<Forecast>, ApiError> {
        if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(ApiError::InvalidArgument(
                "Days must be between 1 and 14".to_string(),
            ));
        }

        Ok((1..=i64::from(days))
            .map(|offset| self.generator.for_offset(today, offset))
            .collect())
    }

    /// A generated forecast for an explicit date; past dates have none.
    pub fn by_date(&self, date: NaiveDate, today: NaiveDate) -> Result<Forecast, ApiError> {
        if date < today {
            return Err(ApiError::NotFound(
                "Cannot retrieve forecast for past dates".to_string(),
            ));
        }

        Ok(self.generator.for_date(date))
    }

    /// Validate a creation request and build the forecast verbatim from its
    /// fields; nothing is regenerated.
    pub fn create(
        &self,
        request: &CreateForecastRequest,
        today: NaiveDate,
    ) -> Result<Forecast, ApiError> {
        let errors = validation::validate(request, today);
        match request.date {
            // The presence rule guarantees a date whenever validation passes.
            Some(date) if errors.is_empty() => Ok(Forecast::new(
                date,
                request.temperature_c,
                request.summary.clone(),
            )),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random::SeededRandom;
    use chrono::Duration;
    use std::sync::Arc;

    fn service() -> ForecastService {
        ForecastService::new(ForecastGenerator::new(Arc::new(SeededRandom::from_seed(9))))
    }

    fn today() -> NaiveDate {
        "2030-06-15".parse().unwrap()
    }

    #[test]
    fn list_returns_one_forecast_per_day_starting_tomorrow() {
        for days in [1, 5, 14] {
            let forecasts = service().list(days, today()).unwrap();

            assert_eq!(forecasts.len(), days as usize);
            for (index, forecast) in forecasts.iter().enumerate() {
                assert_eq!(forecast.date, today() + Duration::days(index as i64 + 1));
            }
        }
    }

    #[test]
    fn list_rejects_days_outside_range() {
        for days in [-1, 0, 15, 100] {
            let error = service().list(days, today()).unwrap_err();
            match error {
                ApiError::InvalidArgument(message) => {
                    assert_eq!(message, "Days must be between 1 and 14");
                }
                other => panic!("expected InvalidArgument, got {other:?}"),
            }
        }
    }

    #[test]
    fn by_date_rejects_past_dates() {
        let error = service()
            .by_date(today() - Duration::days(1), today())
            .unwrap_err();
        match error {
            ApiError::NotFound(message) => {
                assert_eq!(message, "Cannot retrieve forecast for past dates");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn by_date_accepts_today_and_future_dates() {
        for offset in [0, 1, 365] {
            let date = today() + Duration::days(offset);
            let forecast = service().by_date(date, today()).unwrap();
            assert_eq!(forecast.date, date);
        }
    }

    #[test]
    fn create_echoes_request_fields_verbatim() {
        let request = CreateForecastRequest {
            date: Some(today() + Duration::days(1)),
            temperature_c: 20,
            summary: Some("Clear".to_string()),
        };

        let forecast = service().create(&request, today()).unwrap();

        assert_eq!(forecast.date, today() + Duration::days(1));
        assert_eq!(forecast.temperature_c, 20);
        assert_eq!(forecast.summary.as_deref(), Some("Clear"));
    }

    #[test]
    fn create_surfaces_the_full_error_list() {
        let request = CreateForecastRequest {
            date: None,
            temperature_c: 200,
            summary: None,
        };

        let error = service().create(&request, today()).unwrap_err();
        match error {
            ApiError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
