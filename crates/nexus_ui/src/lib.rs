//! Button primitives for the Nexus storefront app.
//!
//! The crate owns the button style presets, the class composition helper used to apply caller
//! overrides, and the Leptos [`Button`]/[`Slot`] components. Pages should style actions through
//! these primitives (or [`button_variants`] for non-button elements) instead of repeating the
//! utility class lists.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
pub mod class;
pub mod directive;
mod slot;
pub mod variants;

pub use button::Button;
pub use class::merge_classes;
pub use directive::{
    select_branch, ButtonBranch, ChildShape, LinkTarget, RenderDirective, FALLBACK_NOTICE,
};
pub use slot::Slot;
pub use variants::{
    button_variants, resolve, resolve_tokens, ButtonSize, ButtonVariant, BUTTON_BASE_CLASSES,
};

/// Convenience imports for crates composing pages from these primitives.
pub mod prelude {
    pub use crate::{
        button_variants, Button, ButtonSize, ButtonVariant, LinkTarget, RenderDirective, Slot,
    };
}
