//! Shared helpers for handler tests: real listeners on ephemeral ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::Client;

use crate::config::Config;
use crate::github::GithubClient;
use crate::resume::embedded_resume;
use crate::routes::build_router;
use crate::state::AppState;

/// Serves `router` on 127.0.0.1 and returns the bound address.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Local test traffic must never go through an environment-configured proxy.
pub fn http_client() -> Client {
    Client::builder()
        .no_proxy()
        .user_agent("portfolio-tests")
        .build()
        .unwrap()
}

/// User-Agent the application sends upstream in tests; differs from `http_client`'s.
pub const TEST_UPSTREAM_AGENT: &str = "portfolio-api-under-test";

/// Same client settings as `GithubClient::new`, minus any environment proxy.
pub fn test_state(github_api_url: &str) -> AppState {
    let config = Config {
        port: 0,
        rust_log: "debug".to_string(),
        github_api_url: github_api_url.to_string(),
        github_user_agent: TEST_UPSTREAM_AGENT.to_string(),
        resume_path: None,
    };
    let client = GithubClient::client_builder(&config)
        .no_proxy()
        .build()
        .unwrap();
    AppState {
        github: GithubClient::with_client(client, &config.github_api_url).unwrap(),
        config,
        resume: Arc::new(embedded_resume().unwrap()),
    }
}

/// Starts the full application against `github_api_url` and returns its base URL.
pub async fn spawn_app(github_api_url: &str) -> String {
    let addr = spawn_router(build_router(test_state(github_api_url))).await;
    format!("http://{addr}")
}
