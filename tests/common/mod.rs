//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use art_catalog::config::{CatalogConfig, DataConfig};
use art_catalog::{Catalog, HttpServer, Shutdown};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

/// A catalog server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("catalog server unreachable");
        let status = res.status();
        let body = res.json().await.expect("response body is not JSON");
        (status, body)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub fn fixture_config() -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.data = DataConfig::with_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
    config
}

/// Start a server over the fixture data in `data/`.
pub async fn start_server() -> TestServer {
    let config = fixture_config();
    let catalog = Arc::new(Catalog::load(&config.data).unwrap());

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config, catalog);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}

/// `paintingID`s of a JSON array of paintings, in response order.
#[allow(dead_code)]
pub fn painting_ids(body: &Value) -> Vec<i64> {
    ids(body, "paintingID")
}

/// Values of `key` across a JSON array of records.
pub fn ids(body: &Value, key: &str) -> Vec<i64> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|record| record[key].as_i64().expect("missing id"))
        .collect()
}

/// The `message` of an error body.
#[allow(dead_code)]
pub fn message(body: &Value) -> &str {
    body["message"].as_str().expect("error body without message")
}
