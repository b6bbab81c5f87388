//! Button style presets and the class resolution built on top of them.

use crate::class::merge_classes;

/// Classes shared by every button regardless of variant or size.
pub const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Named visual presets for buttons.
pub enum ButtonVariant {
    /// Solid primary action.
    #[default]
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered button on the page background.
    Outline,
    /// Muted secondary action.
    Secondary,
    /// Borderless button that only shows a background on hover.
    Ghost,
    /// Button styled as an inline text link.
    Link,
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Stable token used in markup (`data-ui-variant`) and configuration.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Parses a variant token. Unknown tokens fall back to [`ButtonVariant::Default`].
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.token().eq_ignore_ascii_case(token))
            .unwrap_or_default()
    }

    /// Class fragment applied on top of [`BUTTON_BASE_CLASSES`].
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Button sizing presets.
pub enum ButtonSize {
    /// Regular height and padding.
    #[default]
    Default,
    /// Compact button.
    Sm,
    /// Large button.
    Lg,
    /// Square button sized for a single icon.
    Icon,
}

impl ButtonSize {
    /// Every size, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Stable token used in markup (`data-ui-size`) and configuration.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Parses a size token. Unknown tokens fall back to [`ButtonSize::Default`].
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.token().eq_ignore_ascii_case(token))
            .unwrap_or_default()
    }

    /// Class fragment applied after the variant fragment.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Concatenates base, variant and size fragments, then the caller's classes.
///
/// No conflict resolution happens here, so the output always holds the base fragment, the variant
/// fragment and the size fragment in that order. Useful for styling non-button elements (router
/// links, labels) exactly like a button.
pub fn button_variants(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    let mut out = String::with_capacity(BUTTON_BASE_CLASSES.len() + 96);
    out.push_str(BUTTON_BASE_CLASSES);
    out.push(' ');
    out.push_str(variant.classes());
    out.push(' ');
    out.push_str(size.classes());
    if let Some(class) = class.map(str::trim).filter(|class| !class.is_empty()) {
        out.push(' ');
        out.push_str(class);
    }
    out
}

/// Resolves the final `class` value for a button.
///
/// Overrides are merged last, so a caller-supplied `bg-*` or `h-*` replaces the preset's.
pub fn resolve(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    merge_classes([button_variants(variant, size, None).as_str(), class.unwrap_or_default()])
}

/// Token-based entry point for [`resolve`]; missing or unknown tokens select the defaults.
pub fn resolve_tokens(variant: Option<&str>, size: Option<&str>, class: Option<&str>) -> String {
    resolve(
        variant.map(ButtonVariant::from_token).unwrap_or_default(),
        size.map(ButtonSize::from_token).unwrap_or_default(),
        class,
    )
}
