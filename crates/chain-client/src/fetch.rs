// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Per-field degradation of remote calls

use std::fmt::Display;

use tracing::debug;

/// Await `call`, substituting `default` if it fails
///
/// Used for fields whose failure must not fail the whole request. The error
/// is logged at debug level and otherwise discarded.
pub async fn fetch_or_default<T, E, F>(call: F, default: T) -> T
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match call.await {
        Ok(value) => value,
        Err(error) => {
            debug!(%error, "remote call failed, using default value");
            default
        }
    }
}
