//! Mock roster service for exercising the HTTP client and worker.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use roster::api::Student;

/// One request exactly as the service saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

/// A canned response to return, oldest first.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            status: 200,
            body: b"[]".to_vec(),
        }
    }
}

impl MockResponse {
    /// Successful list response with the given records.
    pub fn students(students: &[Student]) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(students).expect("students serialize"),
        }
    }

    /// Bare success for create and delete calls.
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: Vec::new(),
        }
    }

    /// The service's usual error body shape.
    pub fn spring_error(status: u16, error: &str, message: &str) -> Self {
        let body = serde_json::json!({
            "timestamp": "2024-05-01T10:00:00Z",
            "status": status,
            "error": error,
            "message": message,
            "path": "/api/v1/students",
        });
        Self {
            status,
            body: serde_json::to_vec(&body).expect("error body serialize"),
        }
    }

    /// Non-JSON error page, the kind a proxy emits.
    pub fn malformed(status: u16) -> Self {
        Self {
            status,
            body: b"<html><body>upstream error</body></html>".to_vec(),
        }
    }
}

/// Everything the serving task and the test share, behind one lock.
#[derive(Default)]
struct Inner {
    seen: Vec<CapturedRequest>,
    queue: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Inner>>;

/// Mock roster service bound to a random local port.
pub struct MockApi {
    pub addr: SocketAddr,
    shared: Shared,
    stop: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockApi {
    /// Bind a fresh service on a random port and start serving.
    pub async fn start() -> Self {
        let shared = Shared::default();
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();

        let router = Router::new()
            .route("/{*path}", any(serve_request))
            .with_state(Arc::clone(&shared));

        // The port is bound before the serve task runs; a request sent
        // right away just waits in the accept backlog.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            shared,
            stop: Some(stop),
        }
    }

    /// Enqueue a response for the next request. With an empty queue every
    /// request gets an empty list.
    pub async fn enqueue(&self, response: MockResponse) {
        self.shared.lock().await.queue.push_back(response);
    }

    /// All captured requests, in arrival order.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.shared.lock().await.seen.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn serve_request(State(shared): State<Shared>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let reply = {
        let mut inner = shared.lock().await;
        inner.seen.push(CapturedRequest { method, path, body });
        inner.queue.pop_front().unwrap_or_default()
    };

    Response::builder()
        .status(StatusCode::from_u16(reply.status).expect("mock status"))
        .header("content-type", "application/json")
        .body(Body::from(reply.body))
        .expect("mock response")
}
