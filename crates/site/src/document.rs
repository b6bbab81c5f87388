//! Static HTML document shell shared by every page.
//!
//! The shell only declares what never changes between pages (charset, viewport, resource links)
//! and leaves named injection points for the framework: route meta tags, the page outlet, the
//! scroll-restoration script and the hydration scripts.

use std::fmt::Write as _;

use serde::Deserialize;

use crate::config::ShellConfig;

/// Placeholder for route-provided meta tags.
pub const META_MARKER: &str = "<!--nexus:meta-->";
/// Placeholder for the rendered page.
pub const OUTLET_MARKER: &str = "<!--nexus:outlet-->";
/// Placeholder for the scroll-restoration script.
pub const SCROLL_RESTORATION_MARKER: &str = "<!--nexus:scroll-restoration-->";
/// Placeholder for framework scripts.
pub const SCRIPTS_MARKER: &str = "<!--nexus:scripts-->";

const VIEWPORT: &str = "width=device-width,initial-scale=1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Supported `<link rel>` values.
pub enum LinkRel {
    /// `rel="stylesheet"`.
    Stylesheet,
    /// `rel="preconnect"`.
    Preconnect,
}

impl LinkRel {
    /// Attribute value for `rel`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Preconnect => "preconnect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
/// One `<link>` element in the document head.
pub struct ResourceLink {
    /// Link relation.
    pub rel: LinkRel,
    /// Target URL.
    pub href: String,
}

impl ResourceLink {
    /// Creates a link.
    pub fn new(rel: LinkRel, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }
}

/// Head links every page loads: the compiled Tailwind sheet, then the Inter font from the
/// Shopify CDN behind a preconnect hint.
pub fn app_links() -> Vec<ResourceLink> {
    vec![
        ResourceLink::new(LinkRel::Stylesheet, "/styles/tailwind.css"),
        ResourceLink::new(LinkRel::Preconnect, "https://cdn.shopify.com/"),
        ResourceLink::new(
            LinkRel::Stylesheet,
            "https://cdn.shopify.com/static/fonts/inter/v4/styles.css",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Framework-provided HTML for the shell's injection points.
///
/// The default value keeps the placeholder markers, which is what [`DocumentShell::assemble`]
/// renders.
pub struct ShellInjections {
    /// Route meta tags, placed after the static head meta.
    pub meta: String,
    /// Rendered page body.
    pub outlet: String,
    /// Scroll-restoration script.
    pub scroll_restoration: String,
    /// Hydration/bootstrap scripts.
    pub scripts: String,
}

impl Default for ShellInjections {
    fn default() -> Self {
        Self {
            meta: META_MARKER.to_string(),
            outlet: OUTLET_MARKER.to_string(),
            scroll_restoration: SCROLL_RESTORATION_MARKER.to_string(),
            scripts: SCRIPTS_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Top-level HTML scaffold.
pub struct DocumentShell {
    lang: String,
    links: Vec<ResourceLink>,
}

impl Default for DocumentShell {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl DocumentShell {
    /// Builds the shell from configuration.
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            lang: config.lang.clone(),
            links: config.links.clone(),
        }
    }

    /// Head links in render order.
    pub fn links(&self) -> &[ResourceLink] {
        &self.links
    }

    /// Renders the shell with placeholder markers at every injection point.
    pub fn assemble(&self) -> String {
        self.render(&ShellInjections::default())
    }

    /// Renders the shell, filling the injection points. Injected HTML is inserted verbatim.
    pub fn render(&self, injections: &ShellInjections) -> String {
        let mut html = String::with_capacity(512);
        html.push_str("<!DOCTYPE html>");
        let _ = write!(html, "<html lang=\"{}\">", escape_attr(&self.lang));
        html.push_str("<head>");
        html.push_str("<meta charset=\"utf-8\">");
        let _ = write!(html, "<meta name=\"viewport\" content=\"{VIEWPORT}\">");
        html.push_str(&injections.meta);
        for link in &self.links {
            let _ = write!(
                html,
                "<link rel=\"{}\" href=\"{}\">",
                link.rel.as_str(),
                escape_attr(&link.href)
            );
        }
        html.push_str("</head><body>");
        html.push_str(&injections.outlet);
        html.push_str(&injections.scroll_restoration);
        html.push_str(&injections.scripts);
        html.push_str("</body></html>");
        html
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            ch => out.push(ch),
        }
    }
    out
}
