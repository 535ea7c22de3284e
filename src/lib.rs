//! CSS Academy: interactive CSS layout lessons with a live code editor.
//!
//! The heart of the crate is the validation/preview engine the editor
//! runs on every keystroke: [`validate_css`] and [`validate_html`]
//! produce diagnostic lists from a text buffer, and [`compose_preview`]
//! assembles the sandboxed preview document from the two buffers. Around
//! that sit the editor surface state machine, the typed lesson catalog
//! with its in-memory store, and an HTTP server exposing the lesson API
//! and the playground page.

pub mod editor;
pub mod error;
pub mod preview;
pub mod schema;
pub mod server;
pub mod storage;
pub mod templates;
pub mod validate;

pub use error::{AcademyError, Result};
pub use preview::compose_preview;
pub use validate::{validate_css, validate_html};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::editor::{EditorSurface, Pane};
    use crate::storage::MemStorage;
    use crate::validate::Language;

    #[test]
    fn end_to_end_lesson_edit_and_preview() {
        let storage = MemStorage::new();
        let lesson = storage.lesson("grid-1").expect("grid-1 is seeded");
        let mut surface = EditorSurface::from_lesson(lesson);

        // The learner types the exercise solution.
        let solution = lesson.exercises[0].solution.clone();
        surface.set_css(solution.clone());
        assert!(surface.diagnostics(Language::Css).is_empty());

        surface.set_active(Pane::Result);
        let doc = surface.visible_preview().expect("result pane is active");
        assert!(doc.contains(&solution));
        assert!(doc.contains(editor::LESSON_DEMO_HTML));
        assert!(doc.contains(preview::BASE_STYLE));
    }

    #[test]
    fn end_to_end_broken_edit_keeps_preview_total() {
        let mut surface = EditorSurface::new();
        surface.set_css(".grid-container {\n  display: grid\n".to_string());
        assert_eq!(
            surface.diagnostics(Language::Css),
            vec![
                "Unmatched braces: 1 opening, 0 closing".to_string(),
                "Line 2: Missing semicolon".to_string(),
            ]
        );

        // Diagnostics never block composition.
        surface.set_active(Pane::Result);
        assert!(surface.visible_preview().is_some());
    }

    #[test]
    fn brace_count_diagnostic_reports_exact_counts() {
        for (css, open, close) in [
            ("{", 1usize, 0usize),
            ("}}", 0, 2),
            (".a { .b { } ", 2, 1),
            ("@media screen { .a { } }", 2, 2),
        ] {
            let diagnostics = validate_css(css);
            if open == close {
                assert!(diagnostics.is_empty(), "{css:?} should be clean");
            } else {
                assert_eq!(
                    diagnostics[0],
                    format!("Unmatched braces: {open} opening, {close} closing")
                );
            }
        }
    }

    #[test]
    fn preview_output_is_stable_across_calls() {
        let html = "<div class=\"flex-container\"><div>A</div></div>";
        let css = ".flex-container { display: flex; }";
        assert_eq!(compose_preview(html, css), compose_preview(html, css));
    }

    #[test]
    fn template_reset_round_trip() {
        for template in &templates::TEMPLATES {
            let mut surface = EditorSurface::from_template(template);
            surface.set_html("<p>changed</p>".to_string());
            surface.reset();
            assert_eq!(surface.html(), template.html);
            assert_eq!(surface.css(), template.css);
        }
    }

    #[test]
    fn validators_are_independent_of_editor_state() {
        // Pure functions: same text, same diagnostics, wherever they run.
        let css = ".a {\n  color: red\n}";
        assert_eq!(validate_css(css), validate_css(css));
        let html = "<div><span></div>";
        assert_eq!(validate_html(html), validate_html(html));
    }
}
