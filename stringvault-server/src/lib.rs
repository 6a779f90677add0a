// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

pub mod api;
pub mod config;
pub mod validation;

use anyhow::Result;
use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use stringvault_query::StringVault;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{
    create_string, delete_string, filter_by_natural_language, get_string, health_check,
    list_strings, AppState,
};
use config::{HttpServerConfig, LoggingConfig, ServerConfig};

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "stringvault_server=info,stringvault_query=info,stringvault_storage=info,tower_http=info"
            .into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the HTTP router with all routes and middleware
pub fn build_router(state: AppState, config: &HttpServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/strings", get(list_strings).post(create_string))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        .route("/strings/:value", get(get_string).delete(delete_string))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )));

    let router = if config.enable_cors {
        router.layer(cors_layer(&config.cors_origins))
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        tracing::info!("CORS: Allowing all origins");
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("CORS: Skipping invalid origin {:?}", origin);
                None
            }
        })
        .collect();

    tracing::info!("CORS: Allowing origins: {:?}", allowed);
    cors.allow_origin(AllowOrigin::list(allowed))
}

/// Serve until ctrl-c; expects `init_tracing` to have run
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting Stringvault Server");
    tracing::info!("Configuration: {:#?}", config);

    config.validate()?;
    let addr = config.socket_addr()?;

    let state = AppState::new(Arc::new(StringVault::new()));
    let app = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server_handle => {
            tracing::info!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
