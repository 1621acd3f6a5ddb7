use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::collections::HashMap;

/// How the fake catalog answers `GET /products`
#[derive(Clone)]
pub enum CatalogReply {
    Products(serde_json::Value),
    Status(StatusCode),
    RawBody(&'static str),
}

/// Start a catalog server on an ephemeral loopback port and return its base URL
pub async fn spawn_catalog_server(reply: CatalogReply) -> String {
    let router = Router::new().route(
        "/products",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let reply = reply.clone();
            async move { respond(reply, params) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Catalog test server failed");
    });

    format!("http://{}", addr)
}

fn respond(reply: CatalogReply, params: HashMap<String, String>) -> Response {
    // The client must always ask for exactly one page of 12
    if params.get("limit").map(String::as_str) != Some("12") {
        return (StatusCode::BAD_REQUEST, "limit must be 12").into_response();
    }

    match reply {
        CatalogReply::Products(products) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            json!({ "products": products, "total": 194, "skip": 0, "limit": 12 }).to_string(),
        )
            .into_response(),
        CatalogReply::Status(status) => (status, "upstream unavailable").into_response(),
        CatalogReply::RawBody(body) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
    }
}

pub fn apple_watch() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Apple Watch",
        "category": "Wearables",
        "description": "x".repeat(100),
        "price": 399,
        "rating": 4.6,
        "stock": 12,
        "thumbnail": "u"
    })
}

pub fn desk_lamp() -> serde_json::Value {
    json!({
        "id": 2,
        "title": "Desk Lamp",
        "category": "home-decoration",
        "description": "Warm light for late nights",
        "price": 24.5,
        "rating": 3.94,
        "stock": 50,
        "thumbnail": "https://cdn.example.com/lamp.png"
    })
}
