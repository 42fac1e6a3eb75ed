//! In-process stand-in for a CmdProxy server
//!
//! Records every request it receives and answers according to a
//! [`Behavior`]. Shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

/// A request as the mock server saw it
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Connect {
        kind: String,
        method: &'static str,
        body: Option<Value>,
    },
    Command {
        kind: String,
        body: Value,
    },
    Disconnect {
        kind: String,
        session_id: Option<String>,
    },
}

/// How the mock server answers
#[derive(Debug, Clone)]
pub struct Behavior {
    pub session_id: String,
    pub connect_status: u16,
    pub command_status: u16,
    pub disconnect_status: u16,
    /// Replaces the connect body when set
    pub connect_body: Option<String>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            session_id: "219602104153538926".to_string(),
            connect_status: 200,
            command_status: 200,
            disconnect_status: 200,
            connect_body: None,
        }
    }
}

struct MockState {
    behavior: Behavior,
    requests: Mutex<Vec<Recorded>>,
}

impl MockState {
    fn record(&self, request: Recorded) {
        self.requests.lock().unwrap().push(request);
    }
}

/// Running mock server, stopped on drop
pub struct MockServer {
    pub addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(behavior: Behavior) -> Self {
        let state = Arc::new(MockState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(
                "/api/v1.0/:kind/connect",
                get(connect_without_body).post(connect_with_body),
            )
            .route("/api/v1.0/:kind/command", post(command))
            .route("/api/v1.0/:kind/disconnect", get(disconnect))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read mock address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).expect("Invalid status in test behavior")
}

fn connect_reply(state: &MockState) -> (StatusCode, String) {
    let behavior = &state.behavior;
    if behavior.connect_status != 200 {
        return (status(behavior.connect_status), String::new());
    }
    let body = behavior
        .connect_body
        .clone()
        .unwrap_or_else(|| json!({ "sessionid": behavior.session_id }).to_string());
    (StatusCode::OK, body)
}

async fn connect_without_body(
    State(state): State<Arc<MockState>>,
    Path(kind): Path<String>,
) -> (StatusCode, String) {
    state.record(Recorded::Connect {
        kind,
        method: "GET",
        body: None,
    });
    connect_reply(&state)
}

async fn connect_with_body(
    State(state): State<Arc<MockState>>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.record(Recorded::Connect {
        kind,
        method: "POST",
        body: Some(body),
    });
    connect_reply(&state)
}

async fn command(
    State(state): State<Arc<MockState>>,
    Path(kind): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.record(Recorded::Command {
        kind,
        body: body.clone(),
    });
    if state.behavior.command_status != 200 {
        return (status(state.behavior.command_status), String::new());
    }
    let mut reply = json!({
        "output": "total 0\n",
        "sessionid": body["sessionid"],
        "command": body["command"],
    });
    if let Some(id) = body.get("commandid") {
        reply["commandid"] = id.clone();
    }
    (StatusCode::OK, reply.to_string())
}

async fn disconnect(
    State(state): State<Arc<MockState>>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    state.record(Recorded::Disconnect {
        kind,
        session_id: params.get("sessionid").cloned(),
    });
    status(state.behavior.disconnect_status)
}
