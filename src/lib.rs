//! Housecount - Hogwarts character dataset explorer
//!
//! Load the character roster, count it by house, species, and blood
//! status, and explore the results from a TUI, a summary printout, or a
//! small HTTP chart viewer.
//!
//! # Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `data` | CSV loading and the `Character` record |
//! | `aggregate` | Normalization, grouping, and drill-down content |
//! | `select` | Per-region selection tracking and highlight styling |
//! | `patronus` | Deterministic patronus assignment |
//! | `summary` | Colored terminal report |
//! | `serve` | HTTP API and embedded chart viewer |
//! | `tui` | Interactive terminal explorer |
//!
//! # Quick Start
//!
//! ```no_run
//! use housecount::{default_houses, group_count, load_characters};
//!
//! let records = load_characters("data/characters.csv", &default_houses()).unwrap();
//! let by_house = group_count(&records, |c| c.house.clone());
//! for bucket in by_house {
//!     println!("{}: {}", bucket.key, bucket.count);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod data;
pub mod patronus;
pub mod select;
pub mod serve;
pub mod summary;
pub mod tui;

pub use aggregate::{
    blood_detail, display_label, filter_to_houses, group_count, group_count_nested, house_detail,
    normalize_blood_status, species_detail, BreakdownSection, Bucket, DetailContent, UNKNOWN_LABEL,
};
pub use config::Config;
pub use data::{default_houses, load_characters, Character, LoadError, KNOWN_HOUSES};
pub use patronus::{assign_patronus, default_labels, EMPTY_PROMPT};
pub use select::{
    apply_change, drill_down, select_and_present, DetailPanel, Highlight, Region,
    RenderingSurface, SelectionChange, SelectionController,
};
