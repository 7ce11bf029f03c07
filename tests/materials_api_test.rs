mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{ids, response_json, TestApp};

#[tokio::test]
async fn lists_catalog_in_store_order_with_derived_status() {
    let app = TestApp::new();

    let response = app.get("/api/v1/materials").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4"]);
    assert_eq!(body["meta"]["count"], 4);

    let statuses: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["status"].as_str().unwrap())
        .collect();
    assert_eq!(
        statuses,
        vec!["In Stock", "Low Stock", "Out of Stock", "In Stock"]
    );
    assert_eq!(body["data"][0]["category"], "Pipes & Fittings");
    assert_eq!(body["data"][0]["price"], "125.50");
}

#[tokio::test]
async fn search_and_category_combine() {
    let app = TestApp::new();

    let body = response_json(app.get("/api/v1/materials?search=PIPE").await).await;
    assert_eq!(ids(&body), vec!["1", "4"]);

    let body = response_json(
        app.get("/api/v1/materials?search=pipes&category=Pipes%20%26%20Fittings")
            .await,
    )
    .await;
    assert_eq!(ids(&body), vec!["1", "4"]);

    let body = response_json(app.get("/api/v1/materials?category=Masonry").await).await;
    assert_eq!(ids(&body), vec!["2"]);

    // category text is searchable too
    let body = response_json(app.get("/api/v1/materials?search=tiles%20%26").await).await;
    assert_eq!(ids(&body), vec!["3"]);

    let body = response_json(app.get("/api/v1/materials?category=All&search=").await).await;
    assert_eq!(ids(&body), vec!["1", "2", "3", "4"]);

    let body = response_json(app.get("/api/v1/materials?search=granite").await).await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn unknown_category_is_a_bad_request() {
    let app = TestApp::new();
    let response = app.get("/api/v1/materials?category=Plumbing").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn categories_follow_declaration_order() {
    let app = TestApp::new();
    let body = response_json(app.get("/api/v1/materials/categories").await).await;
    assert_eq!(
        body["data"],
        json!([
            "Pipes & Fittings",
            "Masonry",
            "Tiles & Flooring",
            "Electrical",
            "Hardware"
        ])
    );
}

#[tokio::test]
async fn quantity_edit_reclassifies_and_updates_summary() {
    let app = TestApp::new();

    let response = app
        .put("/api/v1/materials/2/quantity", json!({ "quantity": 0 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Inventory updated");
    assert_eq!(body["data"]["material"]["quantity"], 0);
    assert_eq!(body["data"]["material"]["status"], "Out of Stock");
    assert_eq!(body["data"]["summary"]["low_stock_items"], 0);
    assert_eq!(body["data"]["summary"]["out_of_stock_items"], 2);

    let body = response_json(app.get("/api/v1/materials/2").await).await;
    assert_eq!(body["data"]["status"], "Out of Stock");

    let response = app
        .put("/api/v1/materials/2/quantity", json!({ "quantity": "75" }))
        .await;
    let body = response_json(response).await;
    assert_eq!(body["data"]["material"]["status"], "In Stock");
}

#[tokio::test]
async fn price_edit_keeps_status_and_changes_value() {
    let app = TestApp::new();

    let response = app
        .put("/api/v1/materials/2/price", json!({ "price": "9.25" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["material"]["price"], "9.25");
    assert_eq!(body["data"]["material"]["status"], "Low Stock");
    assert_eq!(body["data"]["material"]["stock_value"], "138.75");
}

#[tokio::test]
async fn rejected_edits_leave_catalog_untouched() {
    let app = TestApp::new();

    for (uri, payload) in [
        ("/api/v1/materials/1/price", json!({ "price": -1 })),
        ("/api/v1/materials/1/price", json!({ "price": "abc" })),
        ("/api/v1/materials/1/quantity", json!({ "quantity": -5 })),
        ("/api/v1/materials/1/quantity", json!({ "quantity": "4.5" })),
    ] {
        let response = app.put(uri, payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }

    let body = response_json(app.get("/api/v1/materials/1").await).await;
    assert_eq!(body["data"]["price"], "125.50");
    assert_eq!(body["data"]["quantity"], 245);

    let body = response_json(app.get("/api/v1/dashboard/activity").await).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_material_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/materials/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .put("/api/v1/materials/99/price", json!({ "price": 1 }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn summary_ignores_list_filters() {
    let app = TestApp::new();
    let body = response_json(app.get("/api/v1/materials/summary").await).await;
    assert_eq!(body["data"]["total_items"], 4);
    assert_eq!(body["data"]["low_stock_items"], 1);
    assert_eq!(body["data"]["out_of_stock_items"], 1);
    assert_eq!(body["data"]["total_value"], "36683.75");
}

#[tokio::test]
async fn configured_threshold_changes_classification() {
    let mut cfg = TestApp::config();
    cfg.low_stock_threshold = 200;
    let app = TestApp::with_config(cfg);

    let body = response_json(app.get("/api/v1/materials/4").await).await;
    assert_eq!(body["data"]["status"], "Low Stock");
}

#[tokio::test]
async fn oversized_price_is_rejected_and_catalog_stays_readable() {
    let app = TestApp::new();

    let response = app
        .put(
            "/api/v1/materials/1/price",
            json!({ "price": "1000000000000000000000000000" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(app.get("/api/v1/materials/1").await).await;
    assert_eq!(body["data"]["price"], "125.50");

    let body = response_json(app.get("/api/v1/materials/summary").await).await;
    assert_eq!(body["data"]["total_value"], "36683.75");

    let response = app.get("/api/v1/dashboard/overview").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn exponent_json_numbers_are_accepted() {
    let app = TestApp::new();

    let response = app
        .put("/api/v1/materials/2/price", json!({ "price": 1e-6 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["material"]["price"], "0.000001");

    let response = app
        .put("/api/v1/materials/2/quantity", json!({ "quantity": 40.0 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["material"]["quantity"], 40);
}
