//! Browser application for the Auqli Nexus Shopify app: document shell, shell configuration and
//! the mounted Leptos root.

pub mod config;
pub mod document;
mod web_app;

pub use config::{ConfigError, ShellConfig};
pub use document::{app_links, DocumentShell, LinkRel, ResourceLink, ShellInjections};
pub use web_app::{HomePage, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
