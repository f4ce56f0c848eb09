//! OpenAPI specification generation and app factory.

use crate::{
    config::CorsConfig,
    handlers::{create_forecast, get_forecast_by_date, health, list_forecasts, version},
    middleware::{CorsHeaders, RequestIdMiddleware},
    services::{ForecastGenerator, ForecastService, ThreadRandom},
};
use actix_web::{App, HttpResponse};
use paperclip::actix::{OpenApiExt, api_v2_operation, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use std::sync::Arc;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Forecast API - OpenAPI Spec</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 0;
            background: #f5f5f5;
            color: #333;
        }
        .container {
            max-width: 800px;
            margin: 40px auto;
            padding: 20px;
            background: #fff;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
            border-radius: 8px;
        }
        h1 {
            text-align: center;
        }
        pre {
            background: #eee;
            padding: 20px;
            border-radius: 4px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Forecast API OpenAPI Spec</h1>
        <pre id="openapi">Loading...</pre>
    </div>
    <script>
        fetch('/api/spec/v2')
            .then(response => response.json())
            .then(data => {
                document.getElementById('openapi').textContent = JSON.stringify(data, null, 2);
            })
            .catch(error => {
                document.getElementById('openapi').textContent = 'Error loading spec: ' + error;
            });
    </script>
</body>
</html>"#;

/// Documentation index page
///
/// Renders the generated OpenAPI specification for human readers.
#[api_v2_operation(
    summary = "API Documentation Index",
    description = "Renders the OpenAPI specification as a readable HTML page.",
    tags("Documentation"),
    responses(
        (status = 200, description = "Successful response")
    )
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(INDEX_HTML)
}

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Forecast API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Sample weather forecast API for testing and development.\n\n\
                Forecast data is randomly generated in memory; nothing is persisted.\n\
                \n\
                ## Endpoints\n\
                - `GET /api/weatherforecast?days={1..14}` lists generated forecasts\n\
                - `GET /api/weatherforecast/{date}` returns a forecast for one date\n\
                - `POST /api/weatherforecast` validates and stores nothing, echoing the \
                supplied forecast back\n\
                \n\
                Validation failures report the complete list of field errors, not just \
                the first one."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a basic app with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - Weather forecast endpoints (list, lookup by date, create)
/// - Health and version endpoints
/// - OpenAPI specification and documentation index
/// - CORS response headers
/// - Request ID propagation and structured request logging
///
/// This can be used both for testing and as the base for the main application.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors_config = CorsConfig::from_env();
    let generator = ForecastGenerator::new(Arc::new(ThreadRandom));
    let service = ForecastService::new(generator);

    App::new()
        .wrap(CorsHeaders::new(cors_config))
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(service))
        .service(web::resource("/").route(web::get().to(index)))
        .service(
            web::resource("/api/weatherforecast")
                .route(web::get().to(list_forecasts))
                .route(web::post().to(create_forecast)),
        )
        .service(
            web::resource("/api/weatherforecast/{date}")
                .route(web::get().to(get_forecast_by_date)),
        )
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
