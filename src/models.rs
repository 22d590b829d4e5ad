//! Exercise Data Model
//!
//! Immutable data produced by the configuration reader and consumed by the UI.

use serde::{Deserialize, Serialize};

/// A single orderable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Normalized display text
    pub text: String,
    /// Fixed 0-based position as declared in the input (Item1 -> 0, Item2 -> 1, ...)
    pub original_index: usize,
}

/// Polarity of the feedback message slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Good,
    Bad,
    Neutral,
}

impl Polarity {
    pub fn css_class(self) -> &'static str {
        match self {
            Polarity::Good => "good",
            Polarity::Bad => "bad",
            Polarity::Neutral => "",
        }
    }
}

/// Fully validated exercise configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseConfig {
    pub items: Vec<Item>,
    /// Parsed answer key: 0-based original indices in correct final order
    pub key: Vec<usize>,
    /// Active item cap, clamped to [1, 20]
    pub max_count: usize,
    /// 1-based slot numbers whose text contains an internal line break
    pub offenders: Vec<usize>,
}

impl ExerciseConfig {
    /// A key is usable only if it references every item position exactly once.
    pub fn has_valid_key(&self) -> bool {
        let n = self.items.len();
        if n == 0 || self.key.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &k in &self.key {
            if k >= n || seen[k] {
                return false;
            }
            seen[k] = true;
        }
        true
    }

    /// Exact positional match of a displayed order against the key.
    pub fn is_correct(&self, order: &[usize]) -> bool {
        order.len() == self.key.len() && order.iter().zip(&self.key).all(|(a, b)| a == b)
    }

    /// Item text by original index; empty for unknown identifiers.
    pub fn text_of(&self, original_index: usize) -> &str {
        self.items
            .iter()
            .find(|item| item.original_index == original_index)
            .map(|item| item.text.as_str())
            .unwrap_or("")
    }

    /// Identifiers in declaration order, the seed for the initial shuffle
    pub fn identifiers(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.original_index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(texts: &[&str], key: &[usize]) -> ExerciseConfig {
        ExerciseConfig {
            items: texts
                .iter()
                .enumerate()
                .map(|(i, t)| Item {
                    text: t.to_string(),
                    original_index: i,
                })
                .collect(),
            key: key.to_vec(),
            max_count: 10,
            offenders: Vec::new(),
        }
    }

    #[test]
    fn test_valid_key_is_a_permutation() {
        assert!(config(&["a", "b", "c"], &[2, 0, 1]).has_valid_key());
    }

    #[test]
    fn test_key_with_wrong_length_is_invalid() {
        assert!(!config(&["a", "b", "c"], &[0, 1]).has_valid_key());
        assert!(!config(&["a", "b", "c"], &[]).has_valid_key());
    }

    #[test]
    fn test_key_with_out_of_range_value_is_invalid() {
        assert!(!config(&["a", "b", "c"], &[0, 1, 3]).has_valid_key());
    }

    #[test]
    fn test_key_with_duplicates_is_invalid() {
        assert!(!config(&["a", "b", "c"], &[0, 0, 1]).has_valid_key());
    }

    #[test]
    fn test_is_correct_requires_exact_positional_match() {
        let cfg = config(&["a", "b", "c"], &[2, 0, 1]);
        assert!(cfg.is_correct(&[2, 0, 1]));
        assert!(!cfg.is_correct(&[0, 1, 2]));
        assert!(!cfg.is_correct(&[2, 0]));
    }

    #[test]
    fn test_show_solution_order_maps_to_item_texts() {
        // Items A, B, C with key [2, 0, 1] display as C, A, B
        let cfg = config(&["A", "B", "C"], &[2, 0, 1]);
        let shown: Vec<&str> = cfg.key.iter().map(|&idx| cfg.text_of(idx)).collect();
        assert_eq!(shown, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_config_serializes_as_plain_json() {
        let cfg = config(&["a"], &[0]);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{"text": "a", "original_index": 0}],
                "key": [0],
                "max_count": 10,
                "offenders": []
            })
        );
    }
}
