//! Mock to-do backend for exercising the HTTP page source.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// How the mock answers a request.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Serve `total` items in pages of `page_size`, using the `data` key.
    Todos { total: u64, page_size: u64 },
    Status(u16),
    Raw(&'static str),
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockBackend {
    pub async fn start(reply: MockReply) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            queries: Arc::clone(&queries),
        };
        let app = Router::new()
            .route("/todos", get(handle_todos))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, queries }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().await.clone()
    }
}

async fn handle_todos(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let page_number: u64 = query
        .get("pageNumber")
        .and_then(|value| value.parse().ok())
        .unwrap_or(1);
    state.queries.lock().await.push(query);

    match state.reply {
        MockReply::Todos { total, page_size } => {
            let page = super::make_page(page_number, total, page_size);
            let body = serde_json::json!({
                "data": page.items,
                "total": page.total,
                "pageNumber": page.page_number,
                "pageSize": page.page_size,
            });
            (
                [("content-type", "application/json")],
                body.to_string(),
            )
                .into_response()
        }
        MockReply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockReply::Raw(body) => ([("content-type", "application/json")], body).into_response(),
    }
}
