use deepauth_engine::{AnalysisEngine, EngineConfig};
use deepauth_report::{ParsedReport, parse_report};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but with no simulated delay and an ephemeral port.
        let engine = AnalysisEngine::seeded(42).with_config(EngineConfig::instant());
        let app = deepauth_api::app::build_app(engine);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// PNG signature plus an IHDR chunk; enough for the dimension probe.
fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

async fn analyze_text(client: &reqwest::Client, srv: &TestServer, text: &str) -> serde_json::Value {
    let res = client
        .post(srv.url("/analyze/text"))
        .json(&json!({ "text": text }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

async fn analyze_png(client: &reqwest::Client, srv: &TestServer, path: &str) -> serde_json::Value {
    let res = client
        .post(srv.url(path))
        .header("content-type", "image/png")
        .body(png_header(64, 32))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn samples_list_both_kinds() {
    let srv = TestServer::spawn().await;
    let body: serde_json::Value = reqwest::get(srv.url("/samples"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let samples = body.as_array().unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0]["kind"], "ai");
    assert_eq!(samples[1]["kind"], "human");
    assert_eq!(samples[0]["imageFileName"], "sample-ai.jpg");
    assert!(samples[1]["imageUrl"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn casual_text_scores_low() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = analyze_text(&client, &srv, "I can't believe we're gonna do this.").await;

    let score = body["score"].as_f64().unwrap();
    assert!((20.0..=50.0).contains(&score), "score {score}");
    let reasons = body["reasons"].as_array().unwrap();
    assert!((4..=5).contains(&reasons.len()));
    assert_eq!(body["metadata"]["wordCount"], 7);
    assert_eq!(body["metadata"]["modelName"], "DeepAuth-NLP v2.8");
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/analyze/text"))
        .json(&json!({ "text": "  \n " }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn image_upload_reports_dimensions_and_heatmap() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = analyze_png(&client, &srv, "/analyze/image?fileName=photo.png").await;

    assert_eq!(body["metadata"]["imageSize"], "64 × 32px");
    assert_eq!(body["metadata"]["modelName"], "DeepAuth-Vision v3.2");
    let heatmap = body["heatmapData"].as_array().unwrap();
    assert_eq!(heatmap.len(), 20);
    assert!(heatmap.iter().all(|row| row.as_array().unwrap().len() == 20));
    let explanations = body["explanations"].as_array().unwrap();
    assert!((3..=5).contains(&explanations.len()));
}

#[tokio::test]
async fn non_image_content_type_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/analyze/image"))
        .header("content-type", "text/plain")
        .body("hello")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn undecodable_image_is_unprocessable() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(srv.url("/analyze/image?fileName=broken.png"))
        .header("content-type", "image/png")
        .body("definitely not a png")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "decode_error");
    assert!(body["message"].as_str().unwrap().contains("broken.png"));
}

#[tokio::test]
async fn text_report_is_an_attachment() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let text = "So yeah, I'm kinda tired of writing tests today.";
    let result = analyze_text(&client, &srv, text).await;

    let res = client
        .post(srv.url("/reports/text"))
        .json(&json!({ "text": text, "result": result }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let disposition = res
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"text-analysis-"));
    assert!(disposition.ends_with(".json\""));

    match parse_report(&res.text().await.unwrap()).unwrap() {
        ParsedReport::Text(report) => {
            assert_eq!(report.text_preview, text);
            assert_eq!(report.analysis.authenticity_score, result["score"].as_f64().unwrap());
        }
        other => panic!("expected text report, got {other:?}"),
    }
}

#[tokio::test]
async fn image_report_without_name_uses_fallback() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let result = analyze_png(&client, &srv, "/analyze/image").await;

    let res = client
        .post(srv.url("/reports/image"))
        .json(&json!({ "result": result }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    match parse_report(&res.text().await.unwrap()).unwrap() {
        ParsedReport::Image(report) => assert_eq!(report.file_name, "image.jpg"),
        other => panic!("expected image report, got {other:?}"),
    }
}

#[tokio::test]
async fn inconsistent_result_is_not_reported() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let mut result = analyze_text(&client, &srv, "plain words here").await;
    result["score"] = json!(150.0);

    let res = client
        .post(srv.url("/reports/text"))
        .json(&json!({ "text": "plain words here", "result": result }))
        .send()
        .await
        .unwrap();

    assert!(res.status().is_client_error());
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}
