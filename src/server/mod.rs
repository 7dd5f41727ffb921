//! Local preview server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::commands::generate;
use crate::Site;

/// Router serving the public directory, with `404.html` for unknown paths
pub fn router(site: &Site) -> Router {
    let not_found = ServeFile::new(site.public_dir.join("404.html"));
    let files = ServeDir::new(&site.public_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Start the preview server
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    if watch {
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = generate::watch(&site) {
                tracing::error!("File watcher error: {:#}", e);
            }
        });
    }

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(site)).await?;

    Ok(())
}
