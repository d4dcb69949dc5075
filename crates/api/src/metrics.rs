// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::Response,
};
use prometheus::{
    Encoder, HistogramVec, IntCounterVec, TextEncoder, register_histogram_vec,
    register_int_counter_vec,
};
use tracing::error;

/// Total number of contract info requests, labeled by endpoint and status code.
pub static REQUESTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "contract_api_requests_total",
        "Total number of contract info requests, labeled by endpoint and status",
        &["endpoint", "status"]
    )
    .expect("Failed to create contract_api_requests_total counter vec")
});

/// Histogram of contract info request durations in seconds.
pub static REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "contract_api_request_duration_seconds",
        "Contract info request durations in seconds",
        &["endpoint"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create contract_api_request_duration_seconds histogram")
});

/// Record a finished contract info request
///
/// # Arguments
/// * `endpoint` - The endpoint that served the request (`basic`, `nft`, `token`)
/// * `status` - The HTTP status of the response
/// * `duration_secs` - The duration of the request in seconds
pub fn record_request(endpoint: &str, status: StatusCode, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, status.as_str()])
        .inc();
    REQUEST_DURATION
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

/// Axum handler that exports metrics in Prometheus text format
pub async fn metrics_handler() -> Result<Response<String>, StatusCode> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer).map_err(|e| {
        error!(error = %e, "failed to encode metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let body = String::from_utf8(buffer).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.format_type())
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
