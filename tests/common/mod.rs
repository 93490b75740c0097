//! Common test utilities and helpers

use std::net::SocketAddr;
use std::sync::Arc;

use portfolio::catalog::Catalog;
use portfolio::contact::{ContactDelivery, MemoryDelivery};
use portfolio::server::{AppState, PortfolioServer};
use tokio::net::TcpListener;

pub const SUCCESS_MESSAGE: &str = "Thanks, talk soon!";

/// Running API server bound to an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server over the builtin catalog with the given delivery.
pub async fn spawn_server(delivery: Arc<dyn ContactDelivery>) -> TestServer {
    let catalog = Catalog::builtin().expect("builtin catalog");
    spawn_server_with(catalog, delivery).await
}

pub async fn spawn_server_with(catalog: Catalog, delivery: Arc<dyn ContactDelivery>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let state = AppState::new(catalog, delivery, SUCCESS_MESSAGE);
    let server = PortfolioServer::new(
        state,
        listener.local_addr().expect("local addr"),
        true,
    );
    let addr = server.addr();
    tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    TestServer {
        addr,
        client: reqwest::Client::new(),
    }
}

/// Server whose accepted submissions can be inspected afterwards.
pub async fn spawn_recording_server() -> (TestServer, Arc<MemoryDelivery>) {
    let delivery = Arc::new(MemoryDelivery::new());
    let server = spawn_server(delivery.clone()).await;
    (server, delivery)
}
