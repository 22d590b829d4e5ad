//! Configuration Reader
//!
//! Turns the raw host-page strings into one validated `ExerciseConfig`
//! consumed by the rest of the component.

use crate::models::{ExerciseConfig, Item};

/// Number of addressable item slots (Item1..Item20)
pub const MAX_SLOTS: usize = 20;
/// Item cap applied when the host supplies none, or garbage
pub const DEFAULT_MAX: usize = 10;

/// Unparsed host-page input, identical for both sourcing modes
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    /// Raw slot texts, slot N at index N-1; `None` = slot absent
    pub slots: Vec<Option<String>>,
    pub key: Option<String>,
    pub max: Option<String>,
}

/// Line-break and whitespace normalization applied to every raw string:
/// CRLF/CR and U+2028/U+2029 become a single line feed, non-breaking
/// space becomes an ordinary space, surrounding whitespace is stripped.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{2028}', "\n")
        .replace('\u{2029}', "\n")
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}

/// Parse the item cap. Missing or non-numeric input falls back to the
/// default; everything is clamped to [1, MAX_SLOTS].
pub fn parse_max(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_MAX as i64)
        .clamp(1, MAX_SLOTS as i64) as usize
}

/// Parse the raw key string against the accepted item count.
///
/// Tokens are separated by any run of commas, semicolons or whitespace.
/// Unparsable tokens and 1-based references outside [1, item_count] are
/// dropped; survivors keep their order and become 0-based.
pub fn parse_key(raw: &str, item_count: usize) -> Vec<usize> {
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<i64>().ok())
        .filter(|&n| n >= 1 && n <= item_count as i64)
        .map(|n| (n - 1) as usize)
        .collect()
}

impl ExerciseConfig {
    /// Build the validated configuration from raw host input.
    ///
    /// Slots are scanned 1..=20 in order; a slot is accepted only if its
    /// normalized text is non-empty, and scanning stops once `max_count`
    /// items are collected. Multi-line items are accepted but recorded
    /// in the offender list by their 1-based slot number.
    pub fn from_raw(raw: &RawInput) -> Self {
        let max_count = parse_max(raw.max.as_deref());

        let mut items = Vec::new();
        let mut offenders = Vec::new();
        for slot in 1..=MAX_SLOTS {
            if items.len() >= max_count {
                break;
            }
            let text = match raw.slots.get(slot - 1) {
                Some(Some(s)) => normalize_text(s),
                _ => continue,
            };
            if text.is_empty() {
                continue;
            }
            if text.contains('\n') {
                offenders.push(slot);
            }
            items.push(Item {
                text,
                original_index: slot - 1,
            });
        }

        let key = match &raw.key {
            Some(k) => parse_key(k, items.len()),
            None => Vec::new(),
        };

        Self {
            items,
            key,
            max_count,
            offenders,
        }
    }
}
