mod assets;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    asteroid::{Asteroid, Composition},
    cities::{self, City},
    engine::{self, ImpactAssessment},
    generator::AsteroidSampler,
};

pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
struct AppState {
    cities: Vec<City>,
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let state = Arc::new(AppState {
        cities: cities::all(),
    });

    let router = Router::new()
        .route("/", get(index))
        .route("/styles.css", get(styles))
        .route("/app.js", get(script))
        .route("/api/cities", get(list_cities))
        .route("/api/assess", get(assess_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid address {}:{}", config.host, config.port))?;

    println!(
        "Impact viewer live at http://{}:{} (Ctrl+C to stop)",
        config.host, config.port
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("Shutting down viewer...");
}

async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], assets::STYLES_CSS)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::APP_JS,
    )
}

async fn list_cities(State(state): State<Arc<AppState>>) -> Json<Vec<City>> {
    Json(state.cities.clone())
}

#[derive(Debug, Deserialize)]
struct AssessQuery {
    city: String,
    seed: Option<u64>,
    diameter_km: Option<f64>,
    velocity_kmh: Option<f64>,
    density_g_cm3: Option<f64>,
    composition: Option<String>,
}

#[derive(Serialize)]
struct AssessResponse {
    asteroid: Asteroid,
    city: City,
    assessment: ImpactAssessment,
    generated_at: String,
}

async fn assess_handler(
    State(_state): State<Arc<AppState>>,
    Query(query): Query<AssessQuery>,
) -> Response {
    let Some(city) = cities::find(&query.city) else {
        return (
            StatusCode::NOT_FOUND,
            format!("unknown city '{}'", query.city),
        )
            .into_response();
    };

    let asteroid = match build_asteroid(&query) {
        Ok(asteroid) => asteroid,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };

    let assessment = engine::assess(&asteroid, &city);
    Json(AssessResponse {
        asteroid,
        city,
        assessment,
        generated_at: chrono::Local::now().to_rfc3339(),
    })
    .into_response()
}

/// Explicit parameters win when all three are present; otherwise fall back to
/// the quartile sampler, seeded if the client asked for reproducibility.
fn build_asteroid(query: &AssessQuery) -> Result<Asteroid, String> {
    match (query.diameter_km, query.velocity_kmh, query.density_g_cm3) {
        (Some(diameter_km), Some(velocity_kmh), Some(density_g_cm3)) => {
            let composition = match query.composition.as_deref() {
                Some(raw) => raw
                    .parse::<Composition>()
                    .map_err(|err| err.to_string())?,
                None => Composition::Stony,
            };
            Ok(Asteroid::from_diameter(
                diameter_km,
                velocity_kmh,
                density_g_cm3,
                composition,
            ))
        }
        (None, None, None) => {
            let mut sampler = match query.seed {
                Some(seed) => AsteroidSampler::from_seed(seed),
                None => AsteroidSampler::from_entropy(),
            };
            Ok(sampler.sample())
        }
        _ => Err("diameter_km, velocity_kmh, and density_g_cm3 must be given together".to_string()),
    }
}
