// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Health status reported by chain readers

use serde::{Deserialize, Serialize};

/// Health status of a chain reader's upstream node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HealthStatus {
    /// Node answers requests
    Up,
    /// Node answers but something is off, e.g. it is rate limiting us
    Degraded { reason: String },
    /// Node cannot be used
    Down { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_reason_is_kept() {
        let status = HealthStatus::Degraded {
            reason: "Rate limited".to_string(),
        };
        assert_ne!(status, HealthStatus::Up);
        assert!(matches!(status, HealthStatus::Degraded { reason } if reason == "Rate limited"));
    }
}
