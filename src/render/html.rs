use super::Content;
use crate::error::Result;

/// Data handed to the page template: configs, menus, params, every content
/// entry, and `content` holding the content mapping as pretty JSON text.
pub type PageBag = Content;

/// Turns a page bag into the final HTML document.
pub trait PageRenderer {
    fn render_page(&self, bag: &PageBag) -> Result<String>;
}

/// Self-contained page with the bag embedded as a JS object literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPage;

impl PageRenderer for EmbeddedPage {
    /// Important: we avoid `format!()` because the page script is full of `{}`
    /// and `${x}` template literals.
    fn render_page(&self, bag: &PageBag) -> Result<String> {
        // `</` would close the script element early.
        let json = serde_json::to_string(bag)?.replace("</", "<\\/");

        const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Corpus Portal</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .crumbs { display: flex; gap: 8px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .container { display: flex; height: calc(100vh - 58px); }
  .sidebar { width: 300px; border-right: 1px solid #ddd; padding: 12px; overflow: auto; }
  .main { flex: 1; padding: 12px; overflow: auto; }
  .menu h3 { font-size: 13px; text-transform: uppercase; color: #777; margin: 12px 0 4px; }
  .menu a { display: block; padding: 2px 4px; border-radius: 4px; color: #1a4fa0; text-decoration: none; }
  .menu a:hover { background: #f3f3f3; }
  .muted { color: #777; font-size: 12px; }
  pre { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; font-size: 13px; }
</style>
</head>
<body>
<header>
  <div class="crumbs" id="crumbs"></div>
</header>

<div class="container">
  <div class="sidebar menu" id="menu"></div>
  <div class="main">
    <div id="meta" class="muted"></div>
    <pre id="content"></pre>
  </div>
</div>

<script>
const DATA = __DATA__;

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;");
}

function section(title, items, href) {
  if (!items || items.length === 0) return "";
  const links = items.map(it => {
    const value = typeof it === "string" ? it : it.value;
    const name = typeof it === "string" ? it : it.name;
    return `<a href="${escapeHtml(href(value))}">${escapeHtml(name)}</a>`;
  }).join("");
  return `<h3>${escapeHtml(title)}</h3>${links}`;
}

function render() {
  const menus = DATA.menus || {};
  const crumbs = [menus.server, menus.dataset, menus.model, menus.attribute]
    .filter(x => x !== undefined)
    .map(x => `<span class="pill">${escapeHtml(x)}</span>`);
  document.getElementById("crumbs").innerHTML = crumbs.join("");

  document.getElementById("menu").innerHTML = [
    section("Datasets", menus.datasets, v => `/${v}`),
    section("Models", menus.models, v => `/${menus.dataset}/${v}`),
    section("Attributes", menus.attributes, v => `/${menus.dataset}/${menus.model}/${v}`),
    section("Operations", menus.operations, v => `/${v}`),
    section("Visualizations", menus.views, v => `/${v}`),
  ].join("");

  const configs = DATA.configs || {};
  document.getElementById("meta").textContent = configs.url || "";
  document.getElementById("content").textContent = DATA.content || "{}";
}

render();
</script>
</body>
</html>
"#;

        Ok(TEMPLATE.replace("__DATA__", &json))
    }
}
