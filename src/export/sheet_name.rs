//! Worksheet naming rules.
//!
//! Excel limits sheet names to 31 characters, rejects `[ ] : * ? / \`, forbids a
//! leading or trailing apostrophe and compares names case-insensitively.

use crate::model::UNKNOWN_MODEL;

pub const MAX_SHEET_NAME_CHARS: usize = 31;

/// Prefix length kept from the model name when a counter suffix is needed.
const SUFFIX_BASE_CHARS: usize = 28;

const INVALID_CHARS: [char; 7] = ['/', '\\', '*', '[', ']', ':', '?'];

/// Excel reserves this name for its change-tracking sheet.
const RESERVED_NAME: &str = "History";

/// Replace every character Excel rejects in a sheet name with `_`.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    let last = name.chars().count().saturating_sub(1);
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            let edge_quote = c == '\'' && (i == 0 || i == last);
            if edge_quote || INVALID_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Pick a sheet name for `model_name` that is not already in `used`.
///
/// The name is the model name cut to 31 characters and sanitized. On collision it
/// becomes the first 28 characters plus `_1`, `_2`, ... until it is free.
#[must_use]
pub fn unique_sheet_name(model_name: &str, used: &[String]) -> String {
    let model_name = if model_name.is_empty() {
        UNKNOWN_MODEL
    } else {
        model_name
    };

    let candidate = sanitize_sheet_name(&truncate_chars(model_name, MAX_SHEET_NAME_CHARS));
    if !is_taken(&candidate, used) {
        return candidate;
    }

    let mut counter: usize = 1;
    loop {
        let suffix = format!("_{counter}");
        let room = MAX_SHEET_NAME_CHARS
            .saturating_sub(suffix.len())
            .min(SUFFIX_BASE_CHARS);
        let candidate = sanitize_sheet_name(&format!(
            "{}{suffix}",
            truncate_chars(model_name, room)
        ));
        if !is_taken(&candidate, used) {
            return candidate;
        }
        counter += 1;
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn is_taken(name: &str, used: &[String]) -> bool {
    let lower = name.to_lowercase();
    lower == RESERVED_NAME.to_lowercase() || used.iter().any(|u| u.to_lowercase() == lower)
}

/// Hands out unique sheet names for one workbook.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: Vec<String>,
}

impl SheetNamer {
    pub fn assign(&mut self, model_name: &str) -> String {
        let name = unique_sheet_name(model_name, &self.used);
        self.used.push(name.clone());
        name
    }

    #[must_use]
    pub fn used(&self) -> &[String] {
        &self.used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_name_is_kept() {
        assert_eq!(unique_sheet_name("M1", &[]), "M1");
    }

    #[test]
    fn long_name_is_truncated_to_31_chars() {
        let name = "A".repeat(40);
        assert_eq!(unique_sheet_name(&name, &[]), "A".repeat(31));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "é".repeat(40);
        assert_eq!(unique_sheet_name(&name, &[]).chars().count(), 31);
    }

    #[test]
    fn separators_and_stars_become_underscores() {
        assert_eq!(unique_sheet_name(r"Lvl/1\B*", &[]), "Lvl_1_B_");
        assert_eq!(sanitize_sheet_name("a[b]:c?"), "a_b__c_");
    }

    #[test]
    fn edge_apostrophes_are_replaced() {
        assert_eq!(sanitize_sheet_name("'quoted'"), "_quoted_");
        assert_eq!(sanitize_sheet_name("it's"), "it's");
        assert_eq!(sanitize_sheet_name("'"), "_");
    }

    #[test]
    fn collision_uses_28_char_prefix_and_counter() {
        let base = "Project_Building_Architecture";
        let first = format!("{base}_Level01");
        let second = format!("{base}_Level02");

        let mut namer = SheetNamer::default();
        let a = namer.assign(&first);
        let b = namer.assign(&second);

        assert_eq!(a, first.chars().take(31).collect::<String>());
        assert_eq!(b, format!("{}_1", &base[..28]));
        assert_ne!(a, b);
    }

    #[test]
    fn counter_increments_until_free() {
        let used = vec!["M".to_string(), "M_1".to_string(), "M_2".to_string()];
        assert_eq!(unique_sheet_name("M", &used), "M_3");
    }

    #[test]
    fn collisions_are_case_insensitive() {
        let used = vec!["model".to_string()];
        assert_eq!(unique_sheet_name("MODEL", &used), "MODEL_1");
    }

    #[test]
    fn reserved_name_is_avoided() {
        assert_eq!(unique_sheet_name("history", &[]), "history_1");
    }

    #[test]
    fn wide_counter_never_exceeds_limit() {
        let name = "B".repeat(35);
        let mut used = vec!["B".repeat(31)];
        used.extend((1..100).map(|n| format!("{}_{n}", "B".repeat(28))));

        let picked = unique_sheet_name(&name, &used);
        assert_eq!(picked, format!("{}_100", "B".repeat(27)));
        assert!(picked.chars().count() <= MAX_SHEET_NAME_CHARS);
    }

    #[test]
    fn empty_name_becomes_unknown() {
        assert_eq!(unique_sheet_name("", &[]), "Unknown");
    }

    #[test]
    fn many_duplicates_stay_unique() {
        let mut namer = SheetNamer::default();
        for _ in 0..50 {
            namer.assign("Same Model");
        }
        let mut names: Vec<String> = namer.used().iter().map(|n| n.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 50);
    }
}
