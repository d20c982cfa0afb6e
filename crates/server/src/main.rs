mod api;
mod config;
mod dto;
mod feed;
mod state;
mod tracker;

use crate::{config::Args, feed::HttpFeed, state::AppState, tracker::Tracker};
use axum::routing::{get, post};
use clap::Parser;
use railsync::{live::StatusPoller, resolver::Resolver};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!("Starting server...");

    let catalog = match args.catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            error!("Failed to load line catalog: {err}");
            std::process::exit(1);
        }
    };
    info!("Catalog has {} lines", catalog.lines().len());

    let feed = match HttpFeed::new(&args.feed_url, args.request_timeout()) {
        Ok(feed) => feed,
        Err(err) => {
            error!("Failed to build feed client: {err}");
            std::process::exit(1);
        }
    };
    info!("Polling {} every {:?}", args.feed_url, args.poll_interval());

    let tracker = Tracker::new(
        StatusPoller::new(feed, args.train_rule()),
        Resolver::new(catalog.clone()),
        args.poll_interval(),
    );
    let state = Arc::new(AppState { catalog, tracker });

    let app = axum::Router::new()
        .route("/itinerary", post(api::track).delete(api::untrack))
        .route("/tracking", get(api::tracking))
        .route("/status", get(api::status))
        .route("/lines", get(api::lines))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", args.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", args.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {err}");
        std::process::exit(1);
    }
}
