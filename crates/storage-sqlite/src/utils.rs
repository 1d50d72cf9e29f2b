//! Shared helpers for mapping stored values back to domain types.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string into a `Decimal`, with a fallback for
/// scientific notation by parsing as f64 first.
///
/// Amount columns are written by this crate as plain decimal strings, so a
/// parse failure means the database was edited by hand; reads degrade to ZERO
/// instead of failing the whole query.
pub fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}
