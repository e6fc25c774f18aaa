use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use literature_query::{
    HttpLiteratureSearch, LiteratureSearch, Match, QueryController, QueryError, QueryPhase,
    QueryResult, SearchRequest, Year,
};

/// Binds the router to an ephemeral port and returns the base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn query_ok(Json(request): Json<SearchRequest>) -> Json<QueryResult> {
    Json(QueryResult {
        summary: format!("Found 1 article for: {}", request.symptoms),
        matches: vec![Match {
            title: "X".to_string(),
            journal: "Y".to_string(),
            year: Year::Number(2020),
            source: "EuropePMC".to_string(),
            snippet: "Relevant excerpt.".to_string(),
            url: "http://example.org/x".to_string(),
        }],
        citations: vec!["Smith 2020".to_string()],
    })
}

async fn query_unavailable() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Service unavailable")
}

async fn query_rejected() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": "No symptoms provided" })),
    )
}

async fn query_truncated() -> Json<Value> {
    // Success status, but the citations list is missing
    Json(json!({ "summary": "ok", "matches": [] }))
}

#[tokio::test]
async fn round_trips_a_successful_query() {
    let base_url = serve(Router::new().route("/api/query", post(query_ok))).await;
    let backend = HttpLiteratureSearch::new(base_url);

    let result = backend
        .search(&SearchRequest::new("persistent cough, fever"))
        .await
        .unwrap();

    assert_eq!(result.summary, "Found 1 article for: persistent cough, fever");
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].year, Year::Number(2020));
    assert_eq!(result.citations, vec!["Smith 2020".to_string()]);
}

#[tokio::test]
async fn non_success_status_with_text_body_becomes_service_error() {
    let base_url = serve(Router::new().route("/api/query", post(query_unavailable))).await;
    let backend = HttpLiteratureSearch::new(base_url);

    let err = backend
        .search(&SearchRequest::new("fever"))
        .await
        .unwrap_err();

    match err {
        QueryError::Service { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Service unavailable");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn json_detail_field_is_extracted_from_failure_bodies() {
    let base_url = serve(Router::new().route("/api/query", post(query_rejected))).await;
    let backend = HttpLiteratureSearch::new(base_url);

    let err = backend
        .search(&SearchRequest::new("fever"))
        .await
        .unwrap_err();

    match err {
        QueryError::Service { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "No symptoms provided");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn incomplete_success_payload_is_malformed() {
    let base_url = serve(Router::new().route("/api/query", post(query_truncated))).await;
    let backend = HttpLiteratureSearch::new(base_url);

    let err = backend
        .search(&SearchRequest::new("fever"))
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_service_becomes_transport_error() {
    // Bind and immediately drop a listener so the port is closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpLiteratureSearch::new(format!("http://{}", addr));
    let err = backend
        .search(&SearchRequest::new("fever"))
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Transport(_)));
}

#[tokio::test]
async fn controller_completes_a_query_over_http() {
    let base_url = serve(Router::new().route("/api/query", post(query_ok))).await;
    let controller = QueryController::new(Arc::new(HttpLiteratureSearch::new(base_url)));

    controller.update_input("persistent cough, fever").await;
    controller.submit().await;

    match controller.phase().await {
        QueryPhase::Success(result) => {
            assert_eq!(result.matches.len(), 1);
            assert_eq!(result.citations[0], "Smith 2020");
        }
        other => panic!("expected success phase, got {:?}", other),
    }
}
