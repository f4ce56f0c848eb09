//! Weather forecast endpoint handlers.

use crate::{
    models::{CreateForecastRequest, Forecast, ForecastQuery},
    services::ForecastService,
};
use actix_web::{Error, HttpResponse, Result, http::header, web};
use chrono::{Local, NaiveDate};
use paperclip::actix::api_v2_operation;

/// Number of days returned when the caller does not ask for a specific count
const DEFAULT_FORECAST_DAYS: i32 = 5;

/// Forecast listing endpoint
///
/// Returns randomly generated forecasts for the requested number of days,
/// starting at tomorrow, in date order.
#[api_v2_operation(
    summary = "Get weather forecast",
    description = "Retrieves weather forecast data for the specified number of days (1-14, default 5).",
    tags("Weather"),
    responses(
        (status = 200, description = "Weather forecast retrieved successfully", body = Vec<Forecast>),
        (status = 400, description = "Invalid request parameters")
    )
)]
pub async fn list_forecasts(
    query: web::Query<ForecastQuery>,
    service: web::Data<ForecastService>,
) -> Result<web::Json<Vec<Forecast>>, Error> {
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    tracing::info!(days = days, "Listing weather forecast");

    let forecasts = service.list(days, Local::now().date_naive())?;

    Ok(web::Json(forecasts))
}

/// Forecast lookup endpoint
///
/// Returns a generated forecast for one specific date. Dates in the past
/// have no forecast. Repeated lookups for the same date only agree on the
/// date itself; temperature and summary are drawn fresh each time.
#[api_v2_operation(
    summary = "Get weather forecast by date",
    description = "Retrieves weather forecast data for a specific date (YYYY-MM-DD).",
    tags("Weather"),
    responses(
        (status = 200, description = "Weather forecast retrieved successfully", body = Forecast),
        (status = 400, description = "Invalid date format"),
        (status = 404, description = "Forecast not found for the specified date")
    )
)]
pub async fn get_forecast_by_date(
    path: web::Path<NaiveDate>,
    service: web::Data<ForecastService>,
) -> Result<web::Json<Forecast>, Error> {
    let date = path.into_inner();
    tracing::info!(date = %date, "Getting weather forecast by date");

    let forecast = service.by_date(date, Local::now().date_naive())?;

    Ok(web::Json(forecast))
}

/// Forecast creation endpoint
///
/// Validates the request body and echoes the supplied fields back as a new
/// forecast. All field rules are checked; a failing request reports every
/// violation at once.
#[api_v2_operation(
    summary = "Create weather forecast",
    description = "Validates and creates a new weather forecast entry from the supplied fields.",
    tags("Weather"),
    responses(
        (status = 201, description = "Weather forecast created successfully", body = Forecast),
        (status = 400, description = "Invalid request data")
    )
)]
pub async fn create_forecast(
    body: web::Json<CreateForecastRequest>,
    service: web::Data<ForecastService>,
) -> Result<HttpResponse, Error> {
    let request = body.into_inner();
    tracing::info!(date = ?request.date, "Creating weather forecast");

    let forecast = service.create(&request, Local::now().date_naive())?;
    let location = format!("/api/weatherforecast/{}", forecast.date);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(forecast))
}
