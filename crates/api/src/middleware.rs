// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Middleware module for HTTP request processing

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::ServerState;

/// Record every incoming request in the request log before it is routed
pub async fn request_entry_middleware(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    state
        .request_log()
        .log(format!("New Request: {} {}", req.method(), req.uri()));

    next.run(req).await
}
