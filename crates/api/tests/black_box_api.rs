use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

use storefront_api::{app::build_app, config::ApiConfig};
use storefront_auth::{Role, SessionClaims};

const SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let config = ApiConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            session_secret: SECRET.to_string(),
            admin_user: "admin".to_string(),
            admin_pass: "admin1234".to_string(),
            menu_file: None,
        };
        let app = build_app(&config);
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

fn mint_token(role: &'static str) -> String {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        sub: "1".to_string(),
        name: "Tester".to_string(),
        role: Role::new(role),
        iat: now,
        exp: now + 600,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("failed to encode session token")
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/healthz", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn order_list_requires_admin_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/orders", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth(mint_token("customer"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth(mint_token("admin"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_issues_usable_admin_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/admin/login", srv.base_url))
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/api/admin/login", srv.base_url))
        .json(&json!({ "username": "admin", "password": "admin1234" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();

    let res = client
        .get(format!("{}/api/admin/me", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn anonymous_me_returns_null_user() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/admin/me", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn menu_crud_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = mint_token("admin");

    // Create.
    let res = client
        .post(format!("{}/menu", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": "A1", "name": "Tea", "price": 2.5, "cat": "drinks" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Duplicate id conflicts.
    let res = client
        .post(format!("{}/menu", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": "A1", "name": "Other", "price": 9.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Missing price is invalid input.
    let res = client
        .post(format!("{}/menu", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": "A2", "name": "Scone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unauthenticated mutation is rejected, public read is not.
    let res = client
        .post(format!("{}/menu", srv.base_url))
        .json(&json!({ "id": "A3", "name": "Nope", "price": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client.get(format!("{}/menu", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Tea");

    // Shallow-merge update leaves other fields alone.
    let res = client
        .put(format!("{}/menu/A1", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "price": 5.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item"]["price"], 5.0);
    assert_eq!(body["item"]["name"], "Tea");
    assert_eq!(body["item"]["cat"], "drinks");

    // Update of a missing id is 404.
    let res = client
        .put(format!("{}/menu/Z9", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "price": 5.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete twice; both succeed.
    for _ in 0..2 {
        let res = client
            .delete(format!("{}/menu/A1", srv.base_url))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn order_submission_is_public_and_visible_to_admin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({
            "customer": "Bob",
            "type": "pickup",
            "items": [{ "id": "A1", "qty": 1 }],
            "total": 2.5,
            "createdAt": "1999-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let res = client
        .get(format!("{}/orders", srv.base_url))
        .bearer_auth(mint_token("admin"))
        .send()
        .await
        .unwrap();
    let orders: serde_json::Value = res.json().await.unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], id.as_str());
    assert_eq!(orders[0]["status"], "pending");
    // The store assigned its own timestamp, not the caller's.
    assert!(!orders[0]["createdAt"]
        .as_str()
        .unwrap()
        .starts_with("1999"));
}

#[tokio::test]
async fn sse_subscriber_receives_created_event() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = mint_token("admin");

    // Subscription must be registered before the order is submitted.
    let mut stream = client
        .get(format!("{}/events/orders", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(stream.status(), StatusCode::OK);

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "customer": "Bob", "total": 2.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let mut body = String::new();
    loop {
        let chunk = tokio::time::timeout(std::time::Duration::from_secs(5), stream.chunk())
            .await
            .expect("timed out waiting for the created event")
            .unwrap()
            .expect("stream ended before the created event");
        body.push_str(&String::from_utf8_lossy(&chunk));
        if body.contains("event: created") && body.contains("Bob") {
            break;
        }
    }
}

#[tokio::test]
async fn subscription_requires_admin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/events/orders", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/events/orders", srv.base_url))
        .bearer_auth(mint_token("customer"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn menu_import_and_order_export() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = mint_token("admin");

    // Import replaces the menu; invalid rows are dropped silently.
    let res = client
        .post(format!("{}/import/menu", srv.base_url))
        .bearer_auth(&token)
        .json(&json!([
            { "id": "A1", "name": "Tea", "price": 2.5 },
            { "id": "", "name": "Broken", "price": 1.0 },
            { "id": "A2", "name": "Scone", "price": 4.0, "cat": "food" }
        ]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 2);

    // Append mode skips the existing id.
    let res = client
        .post(format!("{}/import/menu?mode=append", srv.base_url))
        .bearer_auth(&token)
        .json(&json!([
            { "id": "A1", "name": "Clobbered", "price": 9.9 },
            { "id": "B1", "name": "Cocoa", "price": 3.0 }
        ]))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 1);

    // A file with no valid rows cannot wipe the menu.
    let res = client
        .post(format!("{}/import/menu", srv.base_url))
        .bearer_auth(&token)
        .json(&json!([{ "id": "", "name": "", "price": 0.0 }]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(format!("{}/menu", srv.base_url)).send().await.unwrap();
    let menu: serde_json::Value = res.json().await.unwrap();
    assert_eq!(menu.as_array().unwrap().len(), 3);

    // Submit an order, then export it as flattened rows.
    client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "customer": "Bob", "items": [{ "id": "A1", "qty": 2 }], "total": 5.0 }))
        .send()
        .await
        .unwrap();

    let res = client
        .get(format!("{}/export/orders", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let rows: serde_json::Value = res.json().await.unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    // Line items ride along as one serialized string cell.
    assert!(rows[0]["items"].as_str().unwrap().contains("\"qty\":2"));
    assert_eq!(rows[0]["customer"], "Bob");
}

#[tokio::test]
async fn payment_confirmation_publishes_confirmed_event() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = mint_token("admin");

    let mut stream = client
        .get(format!("{}/events/orders", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(stream.status(), StatusCode::OK);

    // Missing correlation fields are rejected, as is a zero amount.
    let res = client
        .post(format!("{}/orders/confirm", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "paymentKey": "", "orderId": "", "amount": 2.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/orders/confirm", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "paymentKey": "pk-1", "orderId": "ord-1", "amount": 0.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/orders/confirm", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "paymentKey": "pk-1", "orderId": "ord-1", "amount": 2.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let mut body = String::new();
    loop {
        let chunk = tokio::time::timeout(std::time::Duration::from_secs(5), stream.chunk())
            .await
            .expect("timed out waiting for the confirmed event")
            .unwrap()
            .expect("stream ended before the confirmed event");
        body.push_str(&String::from_utf8_lossy(&chunk));
        if body.contains("event: confirmed") && body.contains("pk-1") {
            break;
        }
    }
}
