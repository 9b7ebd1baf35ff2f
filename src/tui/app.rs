//! Application state for the TUI (Imperative Shell)
//!
//! Owns the loaded record set, the selection controller, and the two
//! collaborator implementations: the chart style store (rendering
//! surface) and the detail panel state. Messages flow through the pure
//! update function; the resulting commands are executed here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::aggregate::{Bucket, DetailContent};
use crate::config::Config;
use crate::data::{load_characters, Character, LoadError};
use crate::patronus::{assign_patronus, EMPTY_PROMPT};
use crate::select::{
    select_and_present, DetailPanel, Highlight, Region, RenderingSurface, SelectionController,
};

use super::msg::Msg;
use super::state;
use super::update::{update, Cmd, Model};

/// Per-element highlight styles recorded for the chart views to draw.
/// This is the TUI's rendering-surface implementation.
#[derive(Debug, Default)]
pub struct ChartStyles {
    highlights: HashMap<(Region, String), Highlight>,
}

impl ChartStyles {
    pub fn highlight(&self, region: Region, key: &str) -> Option<&Highlight> {
        self.highlights.get(&(region, key.to_string()))
    }
}

impl RenderingSurface for ChartStyles {
    fn apply_highlight(&mut self, region: Region, key: &str, style: &Highlight) {
        self.highlights
            .insert((region, key.to_string()), style.clone());
    }

    fn clear_highlight(&mut self, region: Region, key: &str) {
        self.highlights.remove(&(region, key.to_string()));
    }
}

/// Detail panel state; content is replaced wholesale per selection
#[derive(Debug, Default)]
pub struct PanelState {
    pub content: Option<DetailContent>,
}

impl DetailPanel for PanelState {
    fn show(&mut self, content: DetailContent) {
        self.content = Some(content);
    }
}

/// Main application state
pub struct App {
    data_path: PathBuf,
    patronus_labels: Vec<String>,
    allowed_houses: Vec<String>,

    pub records: Vec<Character>,
    pub controller: SelectionController,
    pub styles: ChartStyles,
    pub panel: PanelState,

    pub model: Model,

    // Viewport
    pub viewport_width: u16,
    pub viewport_height: u16,

    // Refresh indicator
    pub refresh_shown_at: Option<Instant>,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: &Config, data_override: Option<PathBuf>) -> Result<Self, LoadError> {
        let data_path = data_override.unwrap_or_else(|| config.data.path.clone());
        let records = load_characters(&data_path, &config.data.houses)?;

        let model = Model {
            bar_count: state::region_buckets(&records, Region::Houses).len(),
            ..Model::default()
        };

        Ok(Self {
            data_path,
            patronus_labels: config.patronus.labels.clone(),
            allowed_houses: config.data.houses.clone(),
            records,
            controller: SelectionController::new(),
            styles: ChartStyles::default(),
            panel: PanelState::default(),
            model,
            viewport_width: 80,
            viewport_height: 24,
            refresh_shown_at: None,
            status_message: None,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Buckets for the region currently on screen
    pub fn current_buckets(&self) -> Vec<Bucket> {
        state::region_buckets(&self.records, self.model.region)
    }

    /// Process one message: pure update, then execute the command.
    /// Returns true when the app should quit.
    pub fn handle_msg(&mut self, msg: Msg) -> bool {
        let (model, cmd) = update(msg, self.model.clone());
        self.model = model;
        self.sync_bar_count();

        match cmd {
            Cmd::None => false,
            Cmd::Quit => true,
            Cmd::ReloadData => {
                self.reload_data();
                false
            }
            Cmd::CommitSelection(region, index) => {
                self.commit_selection(region, index);
                false
            }
            Cmd::ClearSelection(region) => {
                if let Some(old) = self.controller.clear(region) {
                    self.styles.clear_highlight(region, &old);
                    self.panel.content = None;
                    self.set_status(format!("Deselected {}", old));
                }
                false
            }
            Cmd::AssignPatronus(name) => {
                match assign_patronus(&name, &self.patronus_labels) {
                    Some(label) => {
                        self.set_status(format!("{}'s patronus is a {}!", name.trim(), label))
                    }
                    None => self.set_status(EMPTY_PROMPT.to_string()),
                }
                false
            }
            Cmd::SetStatus(message) => {
                self.set_status(message);
                false
            }
        }
    }

    /// Commit the bar at `index` as the region's selection and rebuild
    /// the detail panel scoped to that category.
    fn commit_selection(&mut self, region: Region, index: usize) {
        let buckets = state::region_buckets(&self.records, region);
        let Some(bucket) = buckets.get(index) else {
            return;
        };
        let key = bucket.key.clone();

        select_and_present(
            &mut self.controller,
            &mut self.styles,
            &mut self.panel,
            &self.records,
            region,
            &key,
        );
        self.model.detail_lines = self
            .panel
            .content
            .as_ref()
            .map(detail_line_count)
            .unwrap_or(0);
    }

    /// Reload the dataset from disk. On failure the previous records
    /// are kept and the error goes to the status line.
    pub fn reload_data(&mut self) {
        match load_characters(&self.data_path, &self.allowed_houses) {
            Ok(records) => {
                self.records = records;
                self.sync_bar_count();
                self.model.cursor = state::clamp_cursor(self.model.cursor, self.model.bar_count);
                self.refresh_selection();
                self.show_refresh_indicator();
            }
            Err(e) => self.set_status(format!("Reload failed: {}", e)),
        }
    }

    /// Recompute the detail panel for the current region's selection,
    /// dropping selections whose category vanished from the data.
    fn refresh_selection(&mut self) {
        let region = self.model.region;
        let Some(key) = self.controller.selected(region).map(str::to_string) else {
            return;
        };

        let buckets = state::region_buckets(&self.records, region);
        if let Some(index) = buckets.iter().position(|b| b.key == key) {
            self.commit_selection(region, index);
        } else {
            self.controller.clear(region);
            self.styles.clear_highlight(region, &key);
            self.panel.content = None;
        }
    }

    fn sync_bar_count(&mut self) {
        self.model.bar_count = self.current_buckets().len();
        self.model.cursor = state::clamp_cursor(self.model.cursor, self.model.bar_count);
    }

    /// Show the refresh indicator
    pub fn show_refresh_indicator(&mut self) {
        self.refresh_shown_at = Some(Instant::now());
    }

    /// Periodic tick for status expiry
    pub fn tick(&mut self) {
        if let Some(shown_at) = self.refresh_shown_at {
            if shown_at.elapsed().as_secs() >= 2 {
                self.refresh_shown_at = None;
            }
        }

        if let Some((_, shown_at)) = &self.status_message {
            if shown_at.elapsed().as_secs() >= 3 {
                self.status_message = None;
            }
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.model.detail_height = (height as usize).saturating_sub(6);
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollDown => {
                self.handle_msg(Msg::DetailScrollDown);
            }
            MouseEventKind::ScrollUp => {
                self.handle_msg(Msg::DetailScrollUp);
            }
            _ => {}
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }
}

/// Rendered line count of the detail content, for scroll clamping
fn detail_line_count(content: &DetailContent) -> usize {
    // Header, emblem, total, blank line, then per section: title + rows
    let section_lines: usize = content
        .sections
        .iter()
        .map(|s| s.buckets.len() + 2)
        .sum();
    4 + section_lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::BreakdownSection;
    use std::io::Write;

    fn app_with_dataset(contents: &str) -> (App, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        let config = Config::default();
        let app = App::new(&config, Some(file.path().to_path_buf())).unwrap();
        (app, file)
    }

    const DATASET: &str = "Name;House;Gender;Blood status;Species\n\
        Harry Potter;Gryffindor;Male;Half-blood;Human\n\
        Hermione Granger;Gryffindor;Female;Muggle-born;Human\n\
        Draco Malfoy;Slytherin;Male;Pure-blood;Human\n";

    #[test]
    fn test_app_loads_and_counts_bars() {
        let (app, _file) = app_with_dataset(DATASET);
        assert_eq!(app.records.len(), 3);
        assert_eq!(app.model.bar_count, 2); // Gryffindor, Slytherin
    }

    #[test]
    fn test_select_updates_panel_and_styles() {
        let (mut app, _file) = app_with_dataset(DATASET);

        // Cursor starts on Gryffindor; Enter commits it
        assert!(!app.handle_msg(Msg::Select));

        let content = app.panel.content.as_ref().unwrap();
        assert_eq!(content.header, "Gryffindor");
        assert_eq!(content.total, 2);
        assert!(app
            .styles
            .highlight(Region::Houses, "Gryffindor")
            .is_some());
    }

    #[test]
    fn test_reselect_reverts_previous_highlight() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::Select);
        app.handle_msg(Msg::CursorRight);
        app.handle_msg(Msg::Select);

        assert!(app.styles.highlight(Region::Houses, "Gryffindor").is_none());
        assert!(app.styles.highlight(Region::Houses, "Slytherin").is_some());
        assert_eq!(app.panel.content.as_ref().unwrap().header, "Slytherin");
    }

    #[test]
    fn test_region_switch_keeps_selection() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::Select);
        app.handle_msg(Msg::NextRegion);

        assert_eq!(app.model.region, Region::Species);
        assert_eq!(app.controller.selected(Region::Houses), Some("Gryffindor"));
        // Species chart has a single Human bar
        assert_eq!(app.model.bar_count, 1);
    }

    #[test]
    fn test_cursor_never_touches_selection() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::Select);
        app.handle_msg(Msg::CursorRight);
        app.handle_msg(Msg::CursorLeft);

        assert_eq!(app.controller.selected(Region::Houses), Some("Gryffindor"));
        assert_eq!(app.panel.content.as_ref().unwrap().header, "Gryffindor");
    }

    #[test]
    fn test_clear_selection() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::Select);
        app.handle_msg(Msg::ClearSelection);

        assert_eq!(app.controller.selected(Region::Houses), None);
        assert!(app.panel.content.is_none());
    }

    #[test]
    fn test_patronus_status_line() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::OpenPatronus);
        for c in "Ginny".chars() {
            app.handle_msg(Msg::PatronusInput(c));
        }
        app.handle_msg(Msg::PatronusConfirm);

        let (status, _) = app.status_message.as_ref().unwrap();
        assert!(status.contains("Ginny's patronus is a"));
    }

    #[test]
    fn test_patronus_empty_prompt() {
        let (mut app, _file) = app_with_dataset(DATASET);

        app.handle_msg(Msg::OpenPatronus);
        app.handle_msg(Msg::PatronusConfirm);

        let (status, _) = app.status_message.as_ref().unwrap();
        assert_eq!(status, EMPTY_PROMPT);
    }

    #[test]
    fn test_quit() {
        let (mut app, _file) = app_with_dataset(DATASET);
        assert!(app.handle_msg(Msg::Quit));
    }

    #[test]
    fn test_detail_line_count() {
        let content = DetailContent {
            header: "Gryffindor".to_string(),
            emblem: None,
            total: 2,
            sections: vec![BreakdownSection::new(
                "Gender Breakdown",
                vec![
                    crate::aggregate::Bucket::new("Male", 1),
                    crate::aggregate::Bucket::new("Female", 1),
                ],
            )],
        };
        assert_eq!(detail_line_count(&content), 8);
    }
}
