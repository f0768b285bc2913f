//! Endpoint tests driving the router with fake external services.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use med_assist::api::{create_router, AppState};
use med_assist::application::{
    ChatService, ConsultService, DiagnosisService, HospitalService, RagService,
};
use med_assist::domain::ports::{
    EmbeddingService, Geocoder, LlmService, PlacesService, Translator, VectorStore, VisionService,
};
use med_assist::domain::{
    DocumentChunk, DomainError, Embedding, FacilityRecord, GeoPoint, ImageUpload, SearchResult,
};
use med_assist::infrastructure::PromptsConfig;

struct TaggingTranslator;

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(&self, text: &str, lang: &str) -> Result<String, DomainError> {
        Ok(format!("[{lang}]{text}"))
    }
}

struct StaticLlm;

#[async_trait]
impl LlmService for StaticLlm {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        Ok(format!("advice for: {prompt}"))
    }

    async fn complete_with_system(
        &self,
        _system: &str,
        _prompt: &str,
    ) -> Result<String, DomainError> {
        Ok("Drink fluids and rest.".to_string())
    }
}

struct StaticEmbedding;

#[async_trait]
impl EmbeddingService for StaticEmbedding {
    async fn embed(&self, _text: &str) -> Result<Embedding, DomainError> {
        Ok(Embedding::new(vec![1.0, 0.0]))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        Ok(texts.iter().map(|_| Embedding::new(vec![1.0, 0.0])).collect())
    }

    fn dimension(&self) -> usize {
        2
    }
}

struct StaticStore;

#[async_trait]
impl VectorStore for StaticStore {
    async fn upsert(
        &self,
        _chunk: &DocumentChunk,
        _embedding: &Embedding,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    async fn search(
        &self,
        _query: &Embedding,
        _top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        Ok(vec![SearchResult {
            chunk: DocumentChunk::new("guide.pdf", "hydration guidance", 0),
            score: 0.8,
        }])
    }
}

struct StaticVision {
    fail: bool,
}

#[async_trait]
impl VisionService for StaticVision {
    async fn describe(&self, _image: &ImageUpload, _prompt: &str) -> Result<String, DomainError> {
        if self.fail {
            Err(DomainError::external("model rejected the image"))
        } else {
            Ok("Mild rash, monitor for 48 hours.".to_string())
        }
    }
}

struct StaticGeocoder {
    point: Option<GeoPoint>,
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, _place: &str) -> Result<Option<GeoPoint>, DomainError> {
        Ok(self.point)
    }
}

enum PlacesBehavior {
    Records(Vec<FacilityRecord>),
    Unavailable,
}

struct StaticPlaces {
    behavior: PlacesBehavior,
}

#[async_trait]
impl PlacesService for StaticPlaces {
    async fn find_health_facilities(
        &self,
        _center: GeoPoint,
        _radius_m: u32,
    ) -> Result<Vec<FacilityRecord>, DomainError> {
        match &self.behavior {
            PlacesBehavior::Records(records) => Ok(records.clone()),
            PlacesBehavior::Unavailable => {
                Err(DomainError::unavailable("Overpass request failed: connect error"))
            }
        }
    }
}

struct TestAppOptions {
    vision_fails: bool,
    geocoder_point: Option<GeoPoint>,
    places: PlacesBehavior,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            vision_fails: false,
            geocoder_point: Some(GeoPoint::new(30.0444, 31.2357)),
            places: PlacesBehavior::Records(vec![
                FacilityRecord {
                    name: "City Hospital".to_string(),
                    latitude: 30.05,
                    longitude: 31.24,
                },
                FacilityRecord {
                    name: "Green Clinic".to_string(),
                    latitude: 30.06,
                    longitude: 31.25,
                },
            ]),
        }
    }
}

fn test_app(options: TestAppOptions) -> axum::Router {
    let translator: Arc<dyn Translator> = Arc::new(TaggingTranslator);
    let llm: Arc<dyn LlmService> = Arc::new(StaticLlm);
    let prompts = Arc::new(PromptsConfig::default());
    let rag = Arc::new(RagService::new(
        Arc::new(StaticEmbedding),
        Arc::new(StaticStore),
        4,
    ));

    let state = AppState {
        chat: Arc::new(ChatService::new(
            translator.clone(),
            rag,
            llm.clone(),
            prompts.clone(),
            "ar",
        )),
        consult: Arc::new(ConsultService::new(llm, translator.clone(), prompts.clone())),
        diagnosis: Arc::new(DiagnosisService::new(
            Arc::new(StaticVision {
                fail: options.vision_fails,
            }),
            translator.clone(),
            prompts,
        )),
        hospitals: Arc::new(HospitalService::new(
            Arc::new(StaticGeocoder {
                point: options.geocoder_point,
            }),
            Arc::new(StaticPlaces {
                behavior: options.places,
            }),
            translator.clone(),
            5000,
        )),
        translator,
        default_lang: "ar".to_string(),
    };

    create_router(state)
}

async fn post_json(app: axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_reports_version() {
    let response = test_app(TestAppOptions::default())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn chat_empty_query_is_400() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/chat",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn chat_returns_translated_answer() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/chat",
        serde_json::json!({"query": "ما علاج الجفاف؟"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let response = json["response"].as_str().unwrap();
    assert!(!response.is_empty());
    // answer went through the final translation step
    assert!(response.starts_with("[ar]"));
}

#[tokio::test]
async fn medication_advice_requires_symptoms() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/medication-advice",
        serde_json::json!({"lang": "ar"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
    assert!(json["translation"].as_str().is_some());
}

#[tokio::test]
async fn medication_advice_success_shape() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/medication-advice",
        serde_json::json!({"symptoms": "sore throat", "lang": "fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "medication");
    assert!(json["advice"].as_str().unwrap().contains("sore throat"));
    assert!(json["translation"].as_str().unwrap().starts_with("[fr]"));
}

#[tokio::test]
async fn specialist_requires_illness() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/find-specialist",
        serde_json::json!({"illness": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn specialist_success_shape() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/find-specialist",
        serde_json::json!({"illness": "asthma"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "specialist");
    assert!(!json["specialist"].as_str().unwrap().is_empty());
    assert!(!json["translation"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn hospitals_require_location() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/find-hospitals",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn hospitals_unknown_location_is_400() {
    let options = TestAppOptions {
        geocoder_point: None,
        ..Default::default()
    };
    let (status, json) = post_json(
        test_app(options),
        "/api/find-hospitals",
        serde_json::json!({"location": "Atlantis"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Could not find location");
}

#[tokio::test]
async fn hospitals_list_with_links_and_count() {
    let (status, json) = post_json(
        test_app(TestAppOptions::default()),
        "/api/find-hospitals",
        serde_json::json!({"location": "Cairo"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["location"], "Cairo");

    let facilities = json["facilities"].as_array().unwrap();
    assert_eq!(json["count"].as_u64().unwrap() as usize, facilities.len());

    for facility in facilities {
        let lat = facility["latitude"].as_f64().unwrap();
        let lon = facility["longitude"].as_f64().unwrap();
        let link = facility["maps_link"].as_str().unwrap();
        assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(link.contains(&lat.to_string()));
        assert!(link.contains(&lon.to_string()));
    }
}

#[tokio::test]
async fn hospitals_map_outage_is_503() {
    let options = TestAppOptions {
        places: PlacesBehavior::Unavailable,
        ..Default::default()
    };
    let (status, json) = post_json(
        test_app(options),
        "/api/find-hospitals",
        serde_json::json!({"location": "Cairo"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].as_str().is_some());
    assert_eq!(json["translation"], "[ar]Map service unavailable");
}

fn multipart_body(boundary: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

async fn post_multipart(
    app: axum::Router,
    parts: &[(&str, Option<&str>, &[u8])],
) -> (StatusCode, Value) {
    let boundary = "test-boundary-7d921";
    let response = app
        .oneshot(
            Request::post("/api/analyze-image")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, parts)))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 1];

#[tokio::test]
async fn analyze_image_requires_file() {
    let (status, json) = post_multipart(
        test_app(TestAppOptions::default()),
        &[("lang", None, b"ar")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No file uploaded");
}

#[tokio::test]
async fn analyze_image_rejects_empty_file() {
    let (status, json) = post_multipart(
        test_app(TestAppOptions::default()),
        &[("file", Some("scan.png"), b"")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No file selected");
}

#[tokio::test]
async fn analyze_image_success_shape() {
    let (status, json) = post_multipart(
        test_app(TestAppOptions::default()),
        &[
            ("file", Some("scan.png"), PNG_HEADER),
            ("lang", None, b"en"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "diagnosis");
    assert!(!json["diagnosis"].as_str().unwrap().is_empty());
    assert!(json["translation"].as_str().unwrap().starts_with("[en]"));
}

#[tokio::test]
async fn analyze_image_model_failure_is_500_with_translation() {
    let options = TestAppOptions {
        vision_fails: true,
        ..Default::default()
    };
    let (status, json) = post_multipart(
        test_app(options),
        &[("file", Some("scan.png"), PNG_HEADER)],
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("model rejected"));
    assert_eq!(
        json["translation"],
        "[ar]An error occurred during image analysis"
    );
}
