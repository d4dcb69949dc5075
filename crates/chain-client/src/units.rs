// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal formatting of integer token amounts

use alloy_primitives::{
    U256,
    utils::{ParseUnits, Unit},
};

const ETHER_DECIMALS: u8 = 18;

/// Format `value` as a decimal number with `decimals` fractional digits
///
/// Trailing zeros of the fraction are dropped but one digit is always kept,
/// so one ether formats as `1.0`. With zero decimals the plain integer is
/// returned.
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let formatted = match Unit::new(decimals) {
        Some(unit) => ParseUnits::U256(value).format_units(unit),
        // Scales past 10^77 exceed U256, the whole part is always zero
        None => format!("0.{:0>width$}", value.to_string(), width = usize::from(decimals)),
    };

    trim_fraction(&formatted)
}

fn trim_fraction(formatted: &str) -> String {
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Format a wei amount in ether
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}
