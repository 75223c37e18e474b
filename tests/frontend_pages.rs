mod common;

use axum::http::StatusCode;
use tower::ServiceExt;
use workflow_example::{pages::ROUTES, server::frontend_router};

#[tokio::test]
async fn index_page_welcomes() {
    let response = frontend_router().oneshot(common::get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(common::content_type(&response).starts_with("text/html"));

    let html = common::body_text(response).await;
    assert!(html.contains("Welcome to Workflow Example"));
}

#[tokio::test]
async fn about_page_describes_itself() {
    let response = frontend_router()
        .oneshot(common::get("/about"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = common::body_text(response).await;
    assert!(html.contains("About"));
    assert!(html.contains("This is the about page."));
}

#[tokio::test]
async fn every_registered_route_is_served() {
    let router = frontend_router();

    for (path, page) in ROUTES {
        let response = router.clone().oneshot(common::get(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(common::body_text(response).await, page.render());
    }
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let response = frontend_router()
        .oneshot(common::get("/settings"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(common::content_type(&response).starts_with("text/html"));

    let html = common::body_text(response).await;
    assert!(html.contains("No page exists at /settings."));
}
