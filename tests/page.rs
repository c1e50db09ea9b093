use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use mount_links::{router, ScriptName};

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn links_use_configured_mount() {
    let app = router(Some(ScriptName::new("/centre/public/index.php")));
    let (status, body) = get(app, "/?p=admin/pages").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/centre/public/assets/css/app.css""#));
    assert!(body.contains(r#"src="/centre/public/assets/img/logo.png""#));
    assert!(body.contains(r#"href="/centre/public/?p=/""#));
    assert!(body.contains(r#"href="/centre/public/?p=admin/pages""#));
    assert!(body.contains("<h1>admin/pages</h1>"));
}

#[tokio::test]
async fn root_mount_has_no_prefix() {
    let app = router(Some(ScriptName::new("/index.php")));
    let (_, body) = get(app, "/").await;

    assert!(body.contains(r#"href="/assets/css/app.css""#));
    assert!(body.contains(r#"href="/?p=cerca""#));
}

#[tokio::test]
async fn user_text_is_escaped() {
    let app = router(Some(ScriptName::new("/index.php")));
    let (_, body) = get(app, "/?p=%3Cscript%3E&q=a%26b").await;

    assert!(body.contains("<h1>&lt;script&gt;</h1>"));
    assert!(!body.contains("<script>"));
    assert!(body.contains("<em>a&amp;b</em>"));
    assert!(body.contains(r#"href="/?p=cerca?p=q=a%26b&amp;page=2""#));
}
