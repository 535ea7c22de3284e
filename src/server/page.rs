//! Playground page assembly.
//!
//! One self-contained page: tab bar, editor textarea with a diagnostics
//! strip, template picker, and a sandboxed iframe for the result pane.
//! The page drives the engine through `/api/validate`, `/api/preview`,
//! and `/api/templates/{name}`.

use crate::templates::TEMPLATES;

const PAGE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { width: 100%; height: 100%; background: #f8fafc; color: #0f172a;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
.topbar { display: flex; align-items: center; justify-content: space-between;
  padding: 10px 16px; background: white; border-bottom: 1px solid #e2e8f0; }
.topbar h1 { font-size: 16px; }
.topbar .hint { font-size: 12px; color: #64748b; }
.toolbar { display: flex; align-items: center; gap: 8px; padding: 8px 16px;
  background: white; border-bottom: 1px solid #e2e8f0; }
.toolbar .spacer { flex: 1; }
button { font-size: 12px; padding: 5px 12px; border-radius: 6px; cursor: pointer;
  border: 1px solid #e2e8f0; background: white; color: #334155; }
button:hover { background: #f1f5f9; }
button.active { background: #3b82f6; border-color: #3b82f6; color: white; }
.workspace { display: flex; flex-direction: column; height: calc(100% - 92px); }
.diagnostics { display: none; padding: 8px 16px; background: #fef2f2;
  border-bottom: 1px solid #fecaca; color: #dc2626; font-size: 12px; }
.diagnostics.visible { display: block; }
.diagnostics div::before { content: '• '; }
.status { font-size: 12px; }
.status.ok { color: #16a34a; }
.status.bad { color: #dc2626; }
textarea { flex: 1; width: 100%; padding: 16px; border: 0; resize: none;
  font-family: 'SF Mono', 'JetBrains Mono', monospace; font-size: 13px;
  background: white; outline: none; }
iframe { flex: 1; width: 100%; border: 0; background: white; display: none; }
.toast { position: fixed; bottom: 20px; right: 20px; padding: 10px 16px;
  background: #0f172a; color: white; border-radius: 8px; font-size: 13px;
  opacity: 0; transition: opacity 0.2s; pointer-events: none; }
.toast.visible { opacity: 1; }"#;

const PAGE_JS: &str = r#"
const buffers = { html: seed.html, css: seed.css };
const diagnostics = { html: [], css: [] };
let activeTab = 'html';

const editor = document.getElementById('editor');
const frame = document.getElementById('preview');
const strip = document.getElementById('diagnostics');
const status = document.getElementById('status');
const toast = document.getElementById('toast');

function showToast(title, detail) {
  toast.textContent = title + ' ' + detail;
  toast.classList.add('visible');
  clearTimeout(showToast.timer);
  showToast.timer = setTimeout(() => toast.classList.remove('visible'), 1800);
}

async function revalidate(language) {
  const res = await fetch('/api/validate', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ language, source: buffers[language] }),
  });
  const body = await res.json();
  diagnostics[language] = body.diagnostics;
  renderDiagnostics();
}

function renderDiagnostics() {
  if (activeTab === 'result') { strip.classList.remove('visible'); return; }
  const list = diagnostics[activeTab];
  strip.innerHTML = '';
  for (const d of list) {
    const row = document.createElement('div');
    row.textContent = d;
    strip.appendChild(row);
  }
  strip.classList.toggle('visible', list.length > 0);
  status.textContent = list.length === 0
    ? 'Valid'
    : list.length + ' error' + (list.length === 1 ? '' : 's');
  status.className = 'status ' + (list.length === 0 ? 'ok' : 'bad');
}

async function refreshPreview() {
  const res = await fetch('/api/preview', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ html: buffers.html, css: buffers.css }),
  });
  frame.srcdoc = await res.text();
}

function setTab(tab) {
  activeTab = tab;
  for (const b of document.querySelectorAll('[data-tab]')) {
    b.classList.toggle('active', b.dataset.tab === tab);
  }
  if (tab === 'result') {
    editor.style.display = 'none';
    frame.style.display = 'block';
    refreshPreview();
  } else {
    frame.style.display = 'none';
    editor.style.display = 'block';
    editor.value = buffers[tab];
  }
  renderDiagnostics();
}

editor.addEventListener('input', () => {
  if (activeTab === 'result') return;
  buffers[activeTab] = editor.value;
  revalidate(activeTab);
});

for (const b of document.querySelectorAll('[data-tab]')) {
  b.addEventListener('click', () => setTab(b.dataset.tab));
}

for (const b of document.querySelectorAll('[data-template]')) {
  b.addEventListener('click', async () => {
    const res = await fetch('/api/templates/' + b.dataset.template);
    if (!res.ok) return;
    const pair = await res.json();
    seed.html = pair.html;
    seed.css = pair.css;
    loadSeed();
    for (const t of document.querySelectorAll('[data-template]')) {
      t.classList.toggle('active', t === b);
    }
  });
}

function loadSeed() {
  buffers.html = seed.html;
  buffers.css = seed.css;
  revalidate('html');
  revalidate('css');
  if (activeTab === 'result') refreshPreview();
  else editor.value = buffers[activeTab];
}

document.getElementById('reset').addEventListener('click', () => {
  loadSeed();
  showToast('Code Reset', 'Editor has been reset to initial state.');
});

document.getElementById('copy').addEventListener('click', async () => {
  if (activeTab === 'result') return;
  try {
    await navigator.clipboard.writeText(buffers[activeTab]);
    showToast('Copied!', activeTab.toUpperCase() + ' code copied to clipboard.');
  } catch (err) {
    showToast('Failed to copy', 'Could not copy code to clipboard.');
  }
});

setTab('html');
revalidate('html');
revalidate('css');
"#;

/// JSON-encode a string for embedding in the inline script. `</` is
/// broken so the string can never close the `<script>` block early.
fn json_inline(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

pub(super) fn build_playground_page() -> String {
    let mut template_buttons = String::new();
    for (i, t) in TEMPLATES.iter().enumerate() {
        let active = if i == 0 { " class=\"active\"" } else { "" };
        template_buttons.push_str(&format!(
            "<button data-template=\"{}\"{active}>{}</button>\n",
            t.name, t.label
        ));
    }

    // The grid template seeds the buffers on first load.
    let seed = &TEMPLATES[0];
    let seed_html = json_inline(seed.html);
    let seed_css = json_inline(seed.css);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>CSS Academy — Playground</title>
<style>
{PAGE_CSS}
</style>
</head>
<body>
<div class="topbar">
  <h1>CSS Playground</h1>
  <span class="hint">Try modifying the CSS properties to see live changes!</span>
</div>
<div class="toolbar">
  <button data-tab="html" class="active">HTML</button>
  <button data-tab="css">CSS</button>
  <button data-tab="result">Result</button>
  <span class="spacer"></span>
  {template_buttons}
  <span class="spacer"></span>
  <span id="status" class="status ok">Valid</span>
  <button id="copy">Copy</button>
  <button id="reset">Reset</button>
</div>
<div class="workspace">
  <div id="diagnostics" class="diagnostics"></div>
  <textarea id="editor" spellcheck="false" placeholder="Enter your code here..."></textarea>
  <iframe id="preview" sandbox="allow-same-origin" title="CSS Preview"></iframe>
</div>
<div id="toast" class="toast"></div>
<script>
const seed = {{ html: {seed_html}, css: {seed_css} }};
{PAGE_JS}
</script>
</body>
</html>"##
    )
}
