use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = stockpile_api::app::build_app();
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
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_item(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    price: i64,
) -> serde_json::Value {
    let res = client
        .post(format!("{base_url}/items"))
        .json(&json!({ "name": name, "price": price }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn top_up(client: &reqwest::Client, base_url: &str, item_id: &str, qty: i64) {
    let res = client
        .post(format!("{base_url}/inventory-transaction"))
        .json(&json!({ "item_id": item_id, "qty": qty, "type": "T" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/healthz", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn item_lifecycle_create_get_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_item(&client, &srv.base_url, "Fountain Pen", 1200).await;
    assert_eq!(created["message"], "Item created successfully");
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["price"], 1200);

    let res = client
        .get(format!("{}/items/{id}", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item retrieved successfully");
    assert_eq!(body["data"]["name"], "Fountain Pen");

    let res = client
        .put(format!("{}/items/{id}", srv.base_url))
        .json(&json!({ "price": 1500 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item updated successfully");
    assert!(body.get("data").is_none());

    let res = client
        .delete(format!("{}/items/{id}", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // Soft-deleted: the lookup now fails as a business error.
    let res = client
        .get(format!("{}/items/{id}", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Application error");
    assert_eq!(body["errors"]["not found error"], "item not found");
}

#[tokio::test]
async fn item_validation_and_duplicates_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/items", srv.base_url))
        .json(&json!({ "name": "Pen 2000", "price": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["errors"]["name"], "Invalid Input");

    create_item(&client, &srv.base_url, "Pencil", 50).await;
    let res = client
        .post(format!("{}/items", srv.base_url))
        .json(&json!({ "name": "Pencil", "price": 70 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["Duplicate Error"], "item already registered");
}

#[tokio::test]
async fn transaction_type_codes_are_enforced() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_item(&client, &srv.base_url, "Stapler", 900).await;
    let item_id = created["data"]["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/inventory-transaction", srv.base_url))
        .json(&json!({ "item_id": item_id, "qty": 5, "type": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["errors"]["type"],
        "Type must be either 'T' for Top Up or 'W' for Withdrawal"
    );
}

#[tokio::test]
async fn withdrawal_without_inventory_is_out_of_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_item(&client, &srv.base_url, "Ruler", 300).await;
    let item_id = created["data"]["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/inventory-transaction", srv.base_url))
        .json(&json!({ "item_id": item_id, "qty": 1, "type": "W" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["errors"]["out of stock"],
        "stock is out cannot perform withdrawal"
    );
}

#[tokio::test]
async fn purchase_flow_numbers_orders_and_tracks_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_item(&client, &srv.base_url, "Widget", 100).await;
    let item_id = created["data"]["id"].as_str().unwrap().to_string();
    top_up(&client, &srv.base_url, &item_id, 10).await;

    // First order: O1, price snapshot, stock 10 -> 7.
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "item_id": item_id, "qty": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Order created successfully");
    assert_eq!(body["data"]["order_no"], "O1");
    assert_eq!(body["data"]["price"], 100);

    // Overdraw: rejected, no order row, stock untouched.
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "item_id": item_id, "qty": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["limited stock"], "insufficient amount of stock");

    let res = client
        .get(format!("{}/inventories", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["items"][0]["stock"], 7);

    // The failed attempt did not burn a number.
    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "item_id": item_id, "qty": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["order_no"], "O2");
}

#[tokio::test]
async fn listings_paginate_with_the_original_parameter_names() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["Alpha", "Beta", "Gamma"] {
        create_item(&client, &srv.base_url, name, 10).await;
    }

    let res = client
        .get(format!("{}/items?pageNo=0&pageSize=2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "All items retrieved successfully");
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["total_items"], 3);
    assert_eq!(body["data"]["total_pages"], 2);
    assert_eq!(body["data"]["items"][0]["name"], "Alpha");
}
