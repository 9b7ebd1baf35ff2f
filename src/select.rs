//! Per-region selection tracking
//!
//! Each chart region tracks at most one selected element. Switching
//! selection within a region reverts the previous element's highlight;
//! regions never disturb each other. The controller is an explicit
//! state object handed to the interaction shell, never module-level
//! state. Cursor movement (the hover analogue) is transient and goes
//! nowhere near this module.

use std::collections::HashMap;

use crate::aggregate::{blood_detail, house_detail, species_detail, DetailContent};
use crate::data::Character;

/// An independently tracked group of mutually-exclusive selectable
/// elements. Three regions exist in the richest variant of the
/// visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Houses,
    Species,
    Blood,
}

impl Region {
    pub fn next(self) -> Self {
        match self {
            Region::Houses => Region::Species,
            Region::Species => Region::Blood,
            Region::Blood => Region::Houses,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Region::Houses => Region::Blood,
            Region::Species => Region::Houses,
            Region::Blood => Region::Species,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Region::Houses => "Houses",
            Region::Species => "Species",
            Region::Blood => "Blood Status",
        }
    }
}

/// Visual treatment of a selectable element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Outline color, `None` means no stroke
    pub stroke: Option<&'static str>,
    pub stroke_width: u8,
    /// Selection clears any transient hover filter
    pub hover_filter_cleared: bool,
}

impl Highlight {
    /// The golden-glow treatment for the selected element
    pub fn selected() -> Self {
        Self {
            stroke: Some("#FFD700"),
            stroke_width: 3,
            hover_filter_cleared: true,
        }
    }

    /// Default style: no stroke
    pub fn none() -> Self {
        Self {
            stroke: None,
            stroke_width: 0,
            hover_filter_cleared: false,
        }
    }
}

/// What a selection did: which element (if any) lost its highlight and
/// which gained it. The rendering surface executes this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub region: Region,
    pub deselected: Option<String>,
    pub selected: String,
}

/// Capability interface for whatever draws the charts. The core hands
/// it highlight transitions; it owns shapes and styling.
pub trait RenderingSurface {
    fn apply_highlight(&mut self, region: Region, key: &str, style: &Highlight);
    fn clear_highlight(&mut self, region: Region, key: &str);
}

/// Collaborator that displays drill-down content, replaced wholesale
/// on each selection.
pub trait DetailPanel {
    fn show(&mut self, content: DetailContent);
}

/// One selection slot per region. All regions start unselected.
#[derive(Debug, Default)]
pub struct SelectionController {
    slots: HashMap<Region, String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element in a region. Re-selecting the current element
    /// reports no deselection; any different previous element is
    /// reported for highlight reversion.
    pub fn select(&mut self, region: Region, key: &str) -> SelectionChange {
        let previous = self.slots.insert(region, key.to_string());
        SelectionChange {
            region,
            deselected: previous.filter(|p| p != key),
            selected: key.to_string(),
        }
    }

    pub fn selected(&self, region: Region) -> Option<&str> {
        self.slots.get(&region).map(String::as_str)
    }

    pub fn is_selected(&self, region: Region, key: &str) -> bool {
        self.selected(region) == Some(key)
    }

    pub fn clear(&mut self, region: Region) -> Option<String> {
        self.slots.remove(&region)
    }
}

/// Execute a selection change against a rendering surface: revert the
/// old element to the default style, then apply the selected style.
pub fn apply_change(surface: &mut dyn RenderingSurface, change: &SelectionChange) {
    if let Some(old) = &change.deselected {
        surface.clear_highlight(change.region, old);
    }
    surface.apply_highlight(change.region, &change.selected, &Highlight::selected());
}

/// Recompute the drill-down aggregate for a selected category
pub fn drill_down(records: &[Character], region: Region, key: &str) -> DetailContent {
    match region {
        Region::Houses => house_detail(records, key),
        Region::Species => species_detail(records, key),
        Region::Blood => blood_detail(records, key),
    }
}

/// Full selection flow: update the controller, style the surface,
/// regenerate the detail panel content scoped to the clicked category.
pub fn select_and_present(
    controller: &mut SelectionController,
    surface: &mut dyn RenderingSurface,
    panel: &mut dyn DetailPanel,
    records: &[Character],
    region: Region,
    key: &str,
) {
    let change = controller.select(region, key);
    apply_change(surface, &change);
    panel.show(drill_down(records, region, key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Character;

    #[derive(Default)]
    struct RecordingSurface {
        events: Vec<String>,
    }

    impl RenderingSurface for RecordingSurface {
        fn apply_highlight(&mut self, region: Region, key: &str, style: &Highlight) {
            self.events.push(format!(
                "apply {:?}/{} stroke={:?}",
                region, key, style.stroke
            ));
        }

        fn clear_highlight(&mut self, region: Region, key: &str) {
            self.events.push(format!("clear {:?}/{}", region, key));
        }
    }

    #[derive(Default)]
    struct CapturingPanel {
        content: Option<DetailContent>,
    }

    impl DetailPanel for CapturingPanel {
        fn show(&mut self, content: DetailContent) {
            self.content = Some(content);
        }
    }

    fn character(house: &str, gender: &str) -> Character {
        Character::from_raw("", house, gender, "", "Human")
    }

    #[test]
    fn test_initial_state_unselected() {
        let controller = SelectionController::new();
        assert_eq!(controller.selected(Region::Houses), None);
        assert_eq!(controller.selected(Region::Species), None);
        assert_eq!(controller.selected(Region::Blood), None);
    }

    #[test]
    fn test_select_replaces_within_region() {
        let mut controller = SelectionController::new();

        let first = controller.select(Region::Houses, "Gryffindor");
        assert_eq!(first.deselected, None);
        assert_eq!(first.selected, "Gryffindor");

        let second = controller.select(Region::Houses, "Slytherin");
        assert_eq!(second.deselected.as_deref(), Some("Gryffindor"));
        assert_eq!(second.selected, "Slytherin");
        assert!(controller.is_selected(Region::Houses, "Slytherin"));
        assert!(!controller.is_selected(Region::Houses, "Gryffindor"));
    }

    #[test]
    fn test_reselect_same_element_no_deselect() {
        let mut controller = SelectionController::new();
        controller.select(Region::Houses, "Gryffindor");

        let change = controller.select(Region::Houses, "Gryffindor");
        assert_eq!(change.deselected, None);
    }

    #[test]
    fn test_regions_are_independent() {
        let mut controller = SelectionController::new();
        controller.select(Region::Houses, "Gryffindor");

        let change = controller.select(Region::Species, "Human");
        assert_eq!(change.deselected, None);
        assert_eq!(controller.selected(Region::Houses), Some("Gryffindor"));
        assert_eq!(controller.selected(Region::Species), Some("Human"));
    }

    #[test]
    fn test_clear_region() {
        let mut controller = SelectionController::new();
        controller.select(Region::Blood, "Pure-blood");

        assert_eq!(controller.clear(Region::Blood).as_deref(), Some("Pure-blood"));
        assert_eq!(controller.selected(Region::Blood), None);
    }

    #[test]
    fn test_apply_change_reverts_then_highlights() {
        let mut controller = SelectionController::new();
        let mut surface = RecordingSurface::default();

        let change = controller.select(Region::Houses, "Gryffindor");
        apply_change(&mut surface, &change);
        let change = controller.select(Region::Houses, "Hufflepuff");
        apply_change(&mut surface, &change);

        assert_eq!(
            surface.events,
            vec![
                "apply Houses/Gryffindor stroke=Some(\"#FFD700\")",
                "clear Houses/Gryffindor",
                "apply Houses/Hufflepuff stroke=Some(\"#FFD700\")",
            ]
        );
    }

    #[test]
    fn test_select_and_present_updates_panel() {
        let records = vec![
            character("Gryffindor", "Male"),
            character("Gryffindor", "Female"),
            character("Slytherin", "Male"),
        ];

        let mut controller = SelectionController::new();
        let mut surface = RecordingSurface::default();
        let mut panel = CapturingPanel::default();

        select_and_present(
            &mut controller,
            &mut surface,
            &mut panel,
            &records,
            Region::Houses,
            "Gryffindor",
        );

        let content = panel.content.expect("panel should have content");
        assert_eq!(content.header, "Gryffindor");
        assert_eq!(content.total, 2);
    }

    #[test]
    fn test_region_cycle() {
        assert_eq!(Region::Houses.next(), Region::Species);
        assert_eq!(Region::Species.next(), Region::Blood);
        assert_eq!(Region::Blood.next(), Region::Houses);

        assert_eq!(Region::Houses.prev(), Region::Blood);
        assert_eq!(Region::Blood.prev(), Region::Species);
    }

    #[test]
    fn test_highlight_styles() {
        let selected = Highlight::selected();
        assert_eq!(selected.stroke, Some("#FFD700"));
        assert_eq!(selected.stroke_width, 3);
        assert!(selected.hover_filter_cleared);

        let none = Highlight::none();
        assert_eq!(none.stroke, None);
        assert_eq!(none.stroke_width, 0);
    }
}
