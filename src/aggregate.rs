//! Pure aggregation core (Functional Core)
//!
//! This module contains ONLY pure functions with no I/O.
//! All functions here:
//! - Take immutable inputs
//! - Return new values (no mutation)
//! - Have no side effects
//! - Are easy to test in isolation
//!
//! The imperative shells (the TUI app, the CLI, the HTTP server) call
//! these to turn the loaded record set into grouped counts and
//! drill-down detail content.

use serde::Serialize;

use crate::data::Character;

/// Label substituted for empty categorical values at display time
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A grouped count: how many records share a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub count: usize,
}

impl Bucket {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Normalize a raw blood-status string into the fixed label set.
///
/// Absent or blank input becomes `"Unknown"`. A value mentioning both
/// "pure-blood" and "half-blood" (any case) collapses to the fixed
/// `"Pure-blood or half-blood"` label. Anything else passes through
/// trimmed. Applying this twice yields the same result as once.
pub fn normalize_blood_status(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return UNKNOWN_LABEL.to_string(),
    };

    let cleaned = raw.trim().to_lowercase();
    if cleaned.contains("pure-blood") && cleaned.contains("half-blood") {
        return "Pure-blood or half-blood".to_string();
    }

    raw.trim().to_string()
}

/// Keep only records whose trimmed House is in `allowed`.
/// Retained records carry the trimmed house value; others are dropped
/// silently.
pub fn filter_to_houses(records: &[Character], allowed: &[String]) -> Vec<Character> {
    records
        .iter()
        .filter(|c| allowed.iter().any(|h| h == c.house.trim()))
        .map(|c| {
            let mut kept = c.clone();
            kept.house = kept.house.trim().to_string();
            kept
        })
        .collect()
}

/// Group records by a key extractor and count members per group.
///
/// Group order is the insertion order of first occurrence, matching
/// the order bars appear in the charts. The counts always sum to the
/// input length.
pub fn group_count<F>(records: &[Character], key_fn: F) -> Vec<Bucket>
where
    F: Fn(&Character) -> String,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    for record in records {
        let key = key_fn(record);
        match buckets.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket::new(key, 1)),
        }
    }
    buckets
}

/// Two-level grouping: outer groups in first-occurrence order, each
/// holding its own inner grouped counts.
pub fn group_count_nested<F, G>(
    records: &[Character],
    outer_fn: F,
    inner_fn: G,
) -> Vec<(String, Vec<Bucket>)>
where
    F: Fn(&Character) -> String,
    G: Fn(&Character) -> String,
{
    let mut groups: Vec<(String, Vec<&Character>)> = Vec::new();
    for record in records {
        let key = outer_fn(record);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups
        .into_iter()
        .map(|(key, members)| {
            let owned: Vec<Character> = members.into_iter().cloned().collect();
            (key, group_count(&owned, &inner_fn))
        })
        .collect()
}

/// Substitute `"Unknown"` for empty labels at display time
pub fn display_label(key: &str) -> &str {
    if key.trim().is_empty() {
        UNKNOWN_LABEL
    } else {
        key
    }
}

/// One labeled breakdown list inside the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSection {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

impl BreakdownSection {
    pub fn new(title: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        Self {
            title: title.into(),
            buckets,
        }
    }

    /// Render the section body as `label: count` lines
    pub fn lines(&self) -> Vec<String> {
        self.buckets
            .iter()
            .map(|b| format!("{}: {}", display_label(&b.key), b.count))
            .collect()
    }
}

/// Structured detail-panel content, replaced wholesale on each selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailContent {
    pub header: String,
    /// Emblem image path, present for house drill-downs only
    pub emblem: Option<String>,
    pub total: usize,
    pub sections: Vec<BreakdownSection>,
}

fn members_by<F>(records: &[Character], key_fn: F, value: &str) -> Vec<Character>
where
    F: Fn(&Character) -> String,
{
    records
        .iter()
        .filter(|c| key_fn(c) == value)
        .cloned()
        .collect()
}

/// Drill-down for a clicked house: gender, blood status, and species
/// breakdowns over that house's members.
pub fn house_detail(records: &[Character], house: &str) -> DetailContent {
    let members = members_by(records, |c| c.house.clone(), house);
    DetailContent {
        header: house.to_string(),
        emblem: Some(format!("assets/emblems/{}.png", house.to_lowercase())),
        total: members.len(),
        sections: vec![
            BreakdownSection::new("Gender Breakdown", group_count(&members, |c| c.gender.clone())),
            BreakdownSection::new(
                "Blood Status",
                group_count(&members, |c| c.blood_status_clean.clone()),
            ),
            BreakdownSection::new("Species", group_count(&members, |c| c.species.clone())),
        ],
    }
}

/// Drill-down for a clicked species bubble: house and gender breakdowns
pub fn species_detail(records: &[Character], species: &str) -> DetailContent {
    let members = members_by(records, |c| c.species.clone(), species);
    DetailContent {
        header: display_label(species).to_string(),
        emblem: None,
        total: members.len(),
        sections: vec![
            BreakdownSection::new("House Breakdown", group_count(&members, |c| c.house.clone())),
            BreakdownSection::new("Gender Breakdown", group_count(&members, |c| c.gender.clone())),
        ],
    }
}

/// Drill-down for a clicked blood-status segment: house breakdown
pub fn blood_detail(records: &[Character], blood: &str) -> DetailContent {
    let members = members_by(records, |c| c.blood_status_clean.clone(), blood);
    DetailContent {
        header: display_label(blood).to_string(),
        emblem: None,
        total: members.len(),
        sections: vec![BreakdownSection::new(
            "House Breakdown",
            group_count(&members, |c| c.house.clone()),
        )],
    }
}
