//! Viewer server end to end: router over a real listener.

use std::sync::Arc;

use dealfeed::adapter::inbound::web::server::{self, AppState};
use dealfeed::adapter::outbound::api::DealApiClient;
use dealfeed::application::FeedViewer;
use dealfeed::domain::AuditRules;
use dealfeed::port::DealSource;
use dealfeed::testkit::domain::{charizard, deal, deals_json};
use dealfeed::testkit::http::{CannedResponse, Responder};
use dealfeed::testkit::source::{FailingSource, StaticSource};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct RunningViewer {
    base_url: String,
    stop: oneshot::Sender<()>,
    handle: tokio::task::JoinHandle<dealfeed::error::Result<()>>,
}

impl RunningViewer {
    async fn start(source: Arc<dyn DealSource>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let state = Arc::new(AppState {
            viewer: FeedViewer::new(source).with_audit(AuditRules::default()),
        });
        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(server::serve(listener, state, async move {
            let _ = stopped.await;
        }));
        Self {
            base_url: format!("http://{addr}"),
            stop,
            handle,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("{}{path}", self.base_url))
            .await
            .expect("request viewer")
    }

    async fn shutdown(self) {
        let _ = self.stop.send(());
        self.handle
            .await
            .expect("server task")
            .expect("server exits cleanly");
    }
}

#[tokio::test]
async fn index_renders_loaded_feed() {
    let viewer = RunningViewer::start(Arc::new(StaticSource::new(vec![deal(1), charizard(2)]))).await;

    let response = viewer.get("/").await;
    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let body = response.text().await.expect("body");
    assert!(body.contains("Pikachu (25) – Base"));
    assert!(body.contains("Charizard (4/102) – Base Set"));
    assert!(body.find("Pikachu").unwrap() < body.find("Charizard").unwrap());
    assert!(!body.contains("Errore: "));

    viewer.shutdown().await;
}

#[tokio::test]
async fn every_page_load_reads_the_feed_once() {
    let source = Arc::new(StaticSource::empty());
    let viewer = RunningViewer::start(source.clone()).await;

    let first = viewer.get("/").await.text().await.expect("body");
    assert!(first.contains("Nessun deal ancora disponibile."));
    viewer.get("/").await;
    assert_eq!(source.calls(), 2);

    viewer.shutdown().await;
}

#[tokio::test]
async fn failed_load_still_serves_the_page() {
    let viewer = RunningViewer::start(Arc::new(FailingSource::new("connection refused"))).await;

    let response = viewer.get("/").await;
    assert!(response.status().is_success());
    let body = response.text().await.expect("body");
    assert!(body.contains("Errore: feed load failed: connection refused"));
    assert!(!body.contains("data-deal-id"));

    viewer.shutdown().await;
}

#[tokio::test]
async fn api_error_status_is_shown_on_the_page() {
    let api = Responder::start(vec![CannedResponse::status(502, "{}")]).await;
    let source: Arc<dyn DealSource> = Arc::new(DealApiClient::new(api.base_url.clone()));
    let viewer = RunningViewer::start(source).await;

    let body = viewer.get("/").await.text().await.expect("body");
    assert!(body.contains("Errore: feed load failed: HTTP error"));
    assert!(body.contains("502"));

    viewer.shutdown().await;
}

#[tokio::test]
async fn index_over_deals_api_preserves_order() {
    let api = Responder::start(vec![CannedResponse::json(deals_json(&[deal(9), deal(4)]))]).await;
    let source: Arc<dyn DealSource> = Arc::new(DealApiClient::new(api.base_url.clone()));
    let viewer = RunningViewer::start(source).await;

    let body = viewer.get("/").await.text().await.expect("body");
    let nine = body.find(r#"data-deal-id="9""#).expect("row 9");
    let four = body.find(r#"data-deal-id="4""#).expect("row 4");
    assert!(nine < four);

    viewer.shutdown().await;
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let viewer = RunningViewer::start(Arc::new(StaticSource::empty())).await;

    let body: serde_json::Value = viewer.get("/health").await.json().await.expect("json");
    assert_eq!(body["status"], "ok");

    viewer.shutdown().await;
}
