//! # ID Generation
//!
//! Generates human-readable identifiers from a configurable pattern.
//! Default pattern: `%y%m%d-%T%RRR` (e.g., `260109-02F7K9M`)
//!
//! ## Tokens
//! - `%y`, `%m`, `%d`: Year, Month, Day (2 digits)
//! - `%j`: Day of year (001-366)
//! - `%T`: Base32 time (4 chars, seconds since midnight UTC)
//! - `%R`: Base32 random (count of R determines length)
//!
//! Generated IDs are not guaranteed unique; callers needing uniqueness
//! must check against their own store.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::Rng;

use crate::{
    checksum,
    codec::{self, value_symbol},
    error::ChecksumError,
};

/// Default ID pattern: YYMMDD-TTTTRRR
pub const DEFAULT_PATTERN: &str = "%y%m%d-%T%RRR";

/// Width of the `%T` token.
const TIME_WIDTH: usize = 4;

/// Generates an ID based on the given pattern, using the current time.
///
/// # Arguments
/// * `pattern` - The pattern string with tokens to expand
///
/// # Returns
/// A `String` containing the generated ID
pub fn generate(pattern: &str) -> String {
    generate_at(pattern, Utc::now(), &mut rand::rng())
}

/// Generates an ID and appends its checksum.
///
/// The checksum covers the normalized ID, so pattern hyphens are ignored
/// and the result validates after [`codec::normalize`]. Fails if the
/// pattern contains literals outside the Base32 alphabet.
pub fn generate_checked(pattern: &str) -> Result<String, ChecksumError> {
    let id = generate(pattern);
    let check = checksum::calculate(&codec::normalize(&id))?;
    Ok(id + &check)
}

/// Expands `pattern` for a fixed timestamp and random source.
pub fn generate_at<R: Rng + ?Sized>(pattern: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let mut result = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('y') => {
                    let _ = write!(result, "{:02}", now.year() % 100);
                }
                Some('m') => {
                    let _ = write!(result, "{:02}", now.month());
                }
                Some('d') => {
                    let _ = write!(result, "{:02}", now.day());
                }
                Some('j') => {
                    let _ = write!(result, "{:03}", now.ordinal());
                }
                Some('T') => {
                    let seconds_since_midnight = u64::from(now.num_seconds_from_midnight());
                    // 86399 < 32^4, so the fixed width always fits
                    if let Ok(time) = codec::encode_fixed(seconds_since_midnight, TIME_WIDTH) {
                        result.push_str(&time);
                    }
                }
                Some('R') => {
                    // Count consecutive R's to determine random length
                    let mut count = 1;
                    while chars.peek() == Some(&'R') {
                        chars.next();
                        count += 1;
                    }
                    for _ in 0..count {
                        result.push(value_symbol(rng.random_range(0..32)));
                    }
                }
                Some('%') | None => {
                    result.push('%');
                }
                Some(other) => {
                    // Unknown token, keep as-is
                    result.push('%');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 9, 0, 5, 30).unwrap()
    }

    #[test]
    fn test_default_pattern_format() {
        let id = generate(DEFAULT_PATTERN);
        // Format: YYMMDD-TTTTRRR (14 chars: 6 date + 1 hyphen + 4 time + 3 random)
        assert_eq!(id.len(), 14);
        assert_eq!(&id[6..7], "-");
    }

    #[test]
    fn test_fixed_time_tokens() {
        let mut rng = StdRng::seed_from_u64(7);
        // 00:05:30 is 330 seconds = "00AA"
        assert_eq!(generate_at("%y%m%d-%T", fixed_time(), &mut rng), "260109-00AA");
        assert_eq!(generate_at("%j", fixed_time(), &mut rng), "009");
    }

    #[test]
    fn test_date_tokens() {
        let id = generate("%y%m%d");
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_random_length() {
        assert_eq!(generate("%R").len(), 1);
        assert_eq!(generate("%RR").len(), 2);
        assert_eq!(generate("%RRR").len(), 3);
    }

    #[test]
    fn test_random_uses_alphabet() {
        let id = generate("%RRRRRRRRRRRRRRRRRRRR");
        assert!(id.chars().all(codec::is_valid_char));
        assert!(!id.contains(['I', 'L', 'O', 'U']));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = generate_at("%RRRRRR", fixed_time(), &mut StdRng::seed_from_u64(42));
        let b = generate_at("%RRRRRR", fixed_time(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_literal_passthrough() {
        let id = generate("prefix-%y-suffix");
        assert!(id.starts_with("prefix-"));
        assert!(id.ends_with("-suffix"));
    }

    #[test]
    fn test_escaped_percent() {
        assert_eq!(generate("100%%"), "100%");
        assert_eq!(generate("%q"), "%q");
    }

    #[test]
    fn test_generate_checked_validates_after_normalize() {
        let id = generate_checked(DEFAULT_PATTERN).unwrap();
        assert_eq!(id.len(), 16);
        assert!(checksum::validate(&codec::normalize(&id)));
    }

    #[test]
    fn test_generate_checked_rejects_bad_literals() {
        assert!(generate_checked("ORDER_%RRR").is_err());
    }
}
