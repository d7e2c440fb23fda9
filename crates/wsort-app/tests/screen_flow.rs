//! Screen flow tests against a stubbed classification service.

use std::io::Write;
use std::time::Duration;

use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wsort_app::{Alert, ClassifierScreen, ImageHandle, ImageSource, PickOutcome};
use wsort_ml_client::{ClassifyClient, ClassifyConfig};

struct StubSource {
    outcome: PickOutcome,
}

impl ImageSource for StubSource {
    fn pick_from_library(&self) -> PickOutcome {
        self.outcome.clone()
    }

    fn capture_from_camera(&self) -> PickOutcome {
        self.outcome.clone()
    }
}

fn screen_for(server: &MockServer) -> ClassifierScreen {
    let client = ClassifyClient::new(ClassifyConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .expect("client should build");
    ClassifierScreen::new(client)
}

fn temp_image() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();
    file
}

fn select(screen: &mut ClassifierScreen, file: &NamedTempFile) {
    let source = StubSource {
        outcome: PickOutcome::Selected(ImageHandle::new(file.path())),
    };
    assert!(screen.pick_image(&source).is_none());
}

#[tokio::test]
async fn classify_without_image_alerts_and_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = screen_for(&server);
    let alert = screen.classify().await;

    assert_eq!(alert, Some(Alert::NoImageSelected));
    assert!(!screen.is_loading());
    assert!(screen.top_result().is_none());
}

#[tokio::test]
async fn classify_stores_the_top_prediction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [
                { "label": "plastic", "confidence": 0.92 },
                { "label": "glass", "confidence": 0.05 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = temp_image();
    let mut screen = screen_for(&server);
    select(&mut screen, &file);

    let alert = screen.classify().await;

    assert!(alert.is_none());
    assert!(!screen.is_loading());
    assert_eq!(screen.top_result().unwrap().to_string(), "plastic: 92.00%");
}

#[tokio::test]
async fn empty_predictions_alerts_and_renders_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "predictions": [] })))
        .mount(&server)
        .await;

    let file = temp_image();
    let mut screen = screen_for(&server);
    select(&mut screen, &file);

    let alert = screen.classify().await;

    assert_eq!(alert, Some(Alert::ClassificationFailed));
    assert!(!screen.is_loading());
    assert!(screen.top_result().is_none());
}

#[tokio::test]
async fn failed_attempt_keeps_the_previous_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": [{ "label": "plastic", "confidence": 0.92 }]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let file = temp_image();
    let mut screen = screen_for(&server);
    select(&mut screen, &file);

    assert!(screen.classify().await.is_none());
    assert_eq!(screen.top_result().unwrap().label, "plastic");

    let alert = screen.classify().await;

    assert_eq!(alert, Some(Alert::ClassificationFailed));
    assert!(!screen.is_loading());
    assert_eq!(screen.top_result().unwrap().label, "plastic");
}

#[tokio::test]
async fn http_error_alerts_and_clears_loading() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let file = temp_image();
    let mut screen = screen_for(&server);
    select(&mut screen, &file);

    let alert = screen.classify().await;

    assert_eq!(alert, Some(Alert::ClassificationFailed));
    assert!(!screen.is_loading());
}

#[tokio::test]
async fn unreadable_image_alerts_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = screen_for(&server);
    let source = StubSource {
        outcome: PickOutcome::Selected(ImageHandle::new("/no/such/image.jpg")),
    };
    assert!(screen.pick_image(&source).is_none());

    let alert = screen.classify().await;

    assert_eq!(alert, Some(Alert::ClassificationFailed));
    assert!(!screen.is_loading());
    assert!(screen.top_result().is_none());
}
