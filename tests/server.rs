//! End-to-end tests for the sitemap HTTP surface.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sitemapper::server::{router, AppState};
use sitemapper::sitemap::{Link, StaticBuilder, XmlFormatter};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;

fn test_state() -> AppState {
    let mut sitemaps = BTreeMap::new();
    sitemaps.insert(
        "xml".to_string(),
        vec![vec![Link {
            url: "/".to_string(),
            priority: Some(1.0),
            ..Default::default()
        }]],
    );
    sitemaps.insert(
        "news".to_string(),
        vec![vec![Link {
            url: "/news/today".to_string(),
            ..Default::default()
        }]],
    );

    AppState {
        builder: Arc::new(StaticBuilder::new(sitemaps)),
        formatter: Arc::new(XmlFormatter::new("https://example.com/")),
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_default_sitemap() {
    let response = router(test_state())
        .oneshot(Request::get("/sitemap.xml").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/xml");

    let xml = body_string(response).await;
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<priority>1</priority>"));
}

#[tokio::test]
async fn test_named_sitemap() {
    let response = router(test_state())
        .oneshot(Request::get("/sitemap/news").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let xml = body_string(response).await;
    assert!(xml.contains("<loc>https://example.com/news/today</loc>"));
}

#[tokio::test]
async fn test_named_sitemap_with_xml_suffix() {
    let response = router(test_state())
        .oneshot(Request::get("/sitemap/news.xml").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let xml = body_string(response).await;
    assert!(xml.contains("/news/today"));
}

#[tokio::test]
async fn test_unknown_ident_is_not_found() {
    let response = router(test_state())
        .oneshot(Request::get("/sitemap/videos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
