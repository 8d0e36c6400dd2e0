// File: crates/measure-render-c3/src/lib.rs
// Summary: Hands chart configurations to c3.js: JSON, `c3.generate(...)` calls, or a standalone HTML page.

use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};
use measure_core::{ChartConfig, Result};
use tracing::debug;

pub const D3_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/d3/3.5.17/d3.min.js";
pub const C3_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.11/c3.min.js";
pub const C3_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.11/c3.min.css";

/// Page-level settings for `render_page`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    pub title: String,
    pub d3_js: String,
    pub c3_js: String,
    pub c3_css: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Low-carb diet".to_string(),
            d3_js: D3_JS_URL.to_string(),
            c3_js: C3_JS_URL.to_string(),
            c3_css: C3_CSS_URL.to_string(),
        }
    }
}

/// c3 JSON for one configuration.
pub fn to_json(config: &ChartConfig, pretty: bool) -> Result<String> {
    let text = if pretty { serde_json::to_string_pretty(config)? } else { serde_json::to_string(config)? };
    Ok(text)
}

/// JSON array of several configurations.
pub fn to_json_array(configs: &[ChartConfig], pretty: bool) -> Result<String> {
    let text = if pretty { serde_json::to_string_pretty(configs)? } else { serde_json::to_string(configs)? };
    Ok(text)
}

/// A single `c3.generate(<config>);` statement.
pub fn generate_call(config: &ChartConfig) -> Result<String> {
    Ok(format!("c3.generate({});", to_json(config, false)?))
}

/// One `c3.generate` statement per configuration, in order, newline-terminated.
pub fn render_script(configs: &[ChartConfig]) -> Result<String> {
    let mut out = String::new();
    for cfg in configs {
        out.push_str(&generate_call(cfg)?);
        out.push('\n');
    }
    Ok(out)
}

/// Standalone HTML document with a target `<div>` per chart plus the inline c3 script.
pub fn render_page(configs: &[ChartConfig], opts: &PageOptions) -> Result<String> {
    // "</" inside JSON strings would close the script element early
    let script = render_script(configs)?.replace("</", "<\\/");
    let title = encode_text(&opts.title);
    let targets: String = configs
        .iter()
        .map(|cfg| {
            let m = cfg.measurement;
            format!(
                "  <h2>{}</h2>\n  <div id=\"{}\"></div>\n",
                encode_text(&format!("{} ({})", m.name(), m.unit().symbol())),
                encode_double_quoted_attribute(cfg.target_id()),
            )
        })
        .collect();
    let html = format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <title>{title}</title>\n",
            "  <link rel=\"stylesheet\" href=\"{css}\">\n",
            "</head>\n",
            "<body>\n",
            "  <h1>{title}</h1>\n",
            "{targets}",
            "  <script src=\"{d3}\"></script>\n",
            "  <script src=\"{c3}\"></script>\n",
            "  <script>\n",
            "{script}",
            "  </script>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = title,
        css = encode_double_quoted_attribute(&opts.c3_css),
        targets = targets,
        d3 = encode_double_quoted_attribute(&opts.d3_js),
        c3 = encode_double_quoted_attribute(&opts.c3_js),
        script = script,
    );
    debug!(charts = configs.len(), bytes = html.len(), "rendered page");
    Ok(html)
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
