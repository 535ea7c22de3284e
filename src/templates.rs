//! Playground starter templates.
//!
//! Each template is a named (html, css) pair used to seed or reset the
//! playground buffers. The content is static; resetting to a template is
//! byte-for-byte reproducible.

/// A named playground starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub label: &'static str,
    pub html: &'static str,
    pub css: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template {
        name: "grid",
        label: "CSS Grid",
        html: r#"<div class="grid-container">
  <div class="item item-1">1</div>
  <div class="item item-2">2</div>
  <div class="item item-3">3</div>
  <div class="item item-4">4</div>
  <div class="item item-5">5</div>
  <div class="item item-6">6</div>
</div>"#,
        css: r#".grid-container {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  grid-template-rows: repeat(2, 100px);
  gap: 20px;
  padding: 20px;
}

.item {
  background: linear-gradient(135deg, #3b82f6, #8b5cf6);
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 24px;
  font-weight: bold;
  border-radius: 8px;
}"#,
    },
    Template {
        name: "flexbox",
        label: "Flexbox",
        html: r#"<div class="flex-container">
  <div class="flex-item">Item 1</div>
  <div class="flex-item">Item 2</div>
  <div class="flex-item">Item 3</div>
</div>"#,
        css: r#".flex-container {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 200px;
  padding: 20px;
  background: #f3f4f6;
  border-radius: 8px;
}

.flex-item {
  background: linear-gradient(135deg, #10b981, #3b82f6);
  color: white;
  padding: 20px;
  border-radius: 8px;
  font-weight: bold;
}"#,
    },
    Template {
        name: "position",
        label: "Position",
        html: r#"<div class="position-container">
  <div class="positioned-item absolute-item">Absolute</div>
  <div class="positioned-item relative-item">Relative</div>
  <div class="positioned-item fixed-item">Fixed</div>
</div>"#,
        css: r#".position-container {
  position: relative;
  height: 300px;
  background: linear-gradient(135deg, #f3f4f6, #e5e7eb);
  border-radius: 8px;
  padding: 20px;
}

.positioned-item {
  background: linear-gradient(135deg, #f59e0b, #ef4444);
  color: white;
  padding: 15px;
  border-radius: 6px;
  font-weight: bold;
}

.absolute-item {
  position: absolute;
  top: 20px;
  right: 20px;
}

.relative-item {
  position: relative;
  top: 20px;
  left: 20px;
}

.fixed-item {
  position: fixed;
  bottom: 20px;
  right: 20px;
  z-index: 1000;
}"#,
    },
];

/// Look up a template by name.
pub fn template(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}
