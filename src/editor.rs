//! Editor surface state.
//!
//! One `EditorSurface` owns the two text buffers (HTML, CSS), their
//! diagnostic lists, and the active pane selector. Every commit to a
//! buffer re-runs the validator for that buffer in the same call, so the
//! diagnostics always reflect the latest committed text. Everything here
//! is synchronous and side-effect free beyond the surface's own fields.

use crate::preview::compose_preview;
use crate::schema::Lesson;
use crate::templates::Template;
use crate::validate::{validate_css, validate_html, Language};

/// Demo markup every lesson starts from. Lessons only ask the learner to
/// write CSS; this gives their rules something to style.
pub const LESSON_DEMO_HTML: &str = r#"<div class="grid-container">
  <div class="header">Header</div>
  <div class="sidebar">Sidebar</div>
  <div class="main">Main Content</div>
  <div class="footer">Footer</div>
</div>"#;

/// Which pane the editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Html,
    Css,
    Result,
}

/// A transient user-facing notification. Fire-and-forget: the surface
/// hands these to whoever is driving it and never looks back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
}

impl Notice {
    fn new(title: &str, detail: &str) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct EditorSurface {
    html: String,
    css: String,
    html_diagnostics: Vec<String>,
    css_diagnostics: Vec<String>,
    active: Pane,
    seed_html: String,
    seed_css: String,
}

impl EditorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a lesson: fixed demo markup plus the lesson's starter CSS.
    pub fn from_lesson(lesson: &Lesson) -> Self {
        let mut surface = Self::new();
        surface.load_lesson(lesson);
        surface
    }

    /// Seed from a playground template.
    pub fn from_template(template: &Template) -> Self {
        let mut surface = Self::new();
        surface.load_template(template);
        surface
    }

    /// Replace both buffers with the lesson's seed content. Full
    /// replacement, not an incremental edit.
    pub fn load_lesson(&mut self, lesson: &Lesson) {
        self.seed_html = LESSON_DEMO_HTML.to_string();
        self.seed_css = lesson.initial_css().to_string();
        self.set_html(self.seed_html.clone());
        self.set_css(self.seed_css.clone());
    }

    /// Replace both buffers with the template's pair.
    pub fn load_template(&mut self, template: &Template) {
        self.seed_html = template.html.to_string();
        self.seed_css = template.css.to_string();
        self.set_html(self.seed_html.clone());
        self.set_css(self.seed_css.clone());
    }

    /// Commit new HTML and revalidate it in the same step.
    pub fn set_html(&mut self, text: String) {
        self.html = text;
        self.html_diagnostics = validate_html(&self.html);
    }

    /// Commit new CSS and revalidate it in the same step.
    pub fn set_css(&mut self, text: String) {
        self.css = text;
        self.css_diagnostics = validate_css(&self.css);
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn diagnostics(&self, language: Language) -> &[String] {
        match language {
            Language::Html => &self.html_diagnostics,
            Language::Css => &self.css_diagnostics,
        }
    }

    pub fn active(&self) -> Pane {
        self.active
    }

    pub fn set_active(&mut self, pane: Pane) {
        self.active = pane;
    }

    /// Restore both buffers to their seed content.
    pub fn reset(&mut self) -> Notice {
        self.set_html(self.seed_html.clone());
        self.set_css(self.seed_css.clone());
        Notice::new("Code Reset", "Editor has been reset to initial state.")
    }

    /// Compose the preview document from the current buffers. Pure and
    /// cheap; callers only render it while the Result pane is visible.
    pub fn preview_document(&self) -> String {
        compose_preview(&self.html, &self.css)
    }

    /// The preview document, but only when the Result pane is the one
    /// showing. The composer is not run in the background for other panes.
    pub fn visible_preview(&self) -> Option<String> {
        match self.active {
            Pane::Result => Some(self.preview_document()),
            _ => None,
        }
    }

    /// Text to hand to the clipboard for the active pane, with the notice
    /// to show. The Result pane has nothing to copy.
    pub fn clipboard_text(&self) -> Option<(&str, Notice)> {
        match self.active {
            Pane::Html => Some((
                self.html.as_str(),
                Notice::new("Copied!", "HTML code copied to clipboard."),
            )),
            Pane::Css => Some((
                self.css.as_str(),
                Notice::new("Copied!", "CSS code copied to clipboard."),
            )),
            Pane::Result => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;
    use crate::templates;
    use pretty_assertions::assert_eq;

    #[test]
    fn diagnostics_track_every_commit() {
        let mut surface = EditorSurface::new();
        surface.set_css(".a {\n  color: red\n}".to_string());
        assert_eq!(
            surface.diagnostics(Language::Css),
            vec!["Line 2: Missing semicolon"]
        );

        surface.set_css(".a {\n  color: red;\n}".to_string());
        assert!(surface.diagnostics(Language::Css).is_empty());

        surface.set_html("<div><span></div>".to_string());
        assert_eq!(
            surface.diagnostics(Language::Html),
            vec!["Unmatched HTML tags detected"]
        );
    }

    #[test]
    fn diagnostic_lists_are_replaced_not_merged() {
        let mut surface = EditorSurface::new();
        surface.set_css(".a {\n  color: red\n  margin: 0\n}".to_string());
        assert_eq!(surface.diagnostics(Language::Css).len(), 2);
        surface.set_css(".a {\n  color: red\n}".to_string());
        assert_eq!(surface.diagnostics(Language::Css).len(), 1);
    }

    #[test]
    fn lesson_seeding_uses_demo_markup_and_starter_css() {
        let storage = MemStorage::new();
        let lesson = storage.lesson("grid-1").unwrap();
        let surface = EditorSurface::from_lesson(lesson);
        assert_eq!(surface.html(), LESSON_DEMO_HTML);
        assert_eq!(surface.css(), lesson.initial_css());
        assert!(surface.diagnostics(Language::Html).is_empty());
        assert!(surface.diagnostics(Language::Css).is_empty());
    }

    #[test]
    fn template_round_trip_is_byte_identical() {
        for template in &templates::TEMPLATES {
            let mut surface = EditorSurface::from_template(template);
            surface.set_css("body { color: hotpink; }".to_string());
            surface.set_html("<p>scratch</p>".to_string());
            surface.reset();
            assert_eq!(surface.html(), template.html, "{} html", template.name);
            assert_eq!(surface.css(), template.css, "{} css", template.name);
        }
    }

    #[test]
    fn reset_produces_a_notice() {
        let mut surface = EditorSurface::from_template(&templates::TEMPLATES[0]);
        let notice = surface.reset();
        assert_eq!(notice.title, "Code Reset");
    }

    #[test]
    fn preview_only_visible_on_result_pane() {
        let mut surface = EditorSurface::from_template(&templates::TEMPLATES[0]);
        assert_eq!(surface.visible_preview(), None);
        surface.set_active(Pane::Result);
        let doc = surface.visible_preview().expect("result pane renders");
        assert_eq!(doc, surface.preview_document());
    }

    #[test]
    fn preview_rerender_is_idempotent() {
        let mut surface = EditorSurface::new();
        surface.set_html("<div></div>".to_string());
        surface.set_css("div { height: 10px; }".to_string());
        assert_eq!(surface.preview_document(), surface.preview_document());
    }

    #[test]
    fn clipboard_follows_active_pane() {
        let mut surface = EditorSurface::new();
        surface.set_html("<b></b>".to_string());
        surface.set_css("b { }".to_string());

        surface.set_active(Pane::Html);
        let (text, notice) = surface.clipboard_text().unwrap();
        assert_eq!(text, "<b></b>");
        assert_eq!(notice.detail, "HTML code copied to clipboard.");

        surface.set_active(Pane::Css);
        let (text, _) = surface.clipboard_text().unwrap();
        assert_eq!(text, "b { }");

        surface.set_active(Pane::Result);
        assert!(surface.clipboard_text().is_none());
    }

    #[test]
    fn loading_a_template_replaces_lesson_state() {
        let storage = MemStorage::new();
        let lesson = storage.lesson("flex-1").unwrap();
        let mut surface = EditorSurface::from_lesson(lesson);
        surface.load_template(templates::template("position").unwrap());
        assert!(surface.css().contains(".position-container"));
        // Reset now restores the template, not the lesson.
        surface.set_css(String::new());
        surface.reset();
        assert_eq!(surface.css(), templates::template("position").unwrap().css);
    }
}
