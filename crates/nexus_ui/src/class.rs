//! Utility-class composition with last-one-wins conflict resolution.
//!
//! Components resolve their style from several sources (base classes, variant fragments, caller
//! overrides). [`merge_classes`] joins them into one `class` attribute value, dropping exact
//! duplicates and keeping only the last class of each conflicting utility group so that caller
//! overrides always win.

use std::collections::HashSet;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const RADII: &[&str] = &["", "none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const DISPLAYS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const DECORATIONS: &[&str] = &["underline", "overline", "line-through", "no-underline"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

/// Conflict group of a single utility plus the groups it overrides when it appears later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UtilityGroup {
    name: &'static str,
    overrides: &'static [&'static str],
}

impl UtilityGroup {
    const fn single(name: &'static str) -> Self {
        Self {
            name,
            overrides: &[],
        }
    }

    const fn with_overrides(name: &'static str, overrides: &'static [&'static str]) -> Self {
        Self { name, overrides }
    }
}

fn is_scale_value(value: &str) -> bool {
    value.parse::<u32>().is_ok() || (value.starts_with('[') && value.ends_with(']'))
}

fn spacing_group(utility: &str, family: char) -> Option<UtilityGroup> {
    let (axis, _) = utility.split_once('-')?;
    let group = match (family, axis.strip_prefix(family)?) {
        ('p', "") => UtilityGroup::with_overrides("p", &["px", "py", "pt", "pb", "pl", "pr"]),
        ('p', "x") => UtilityGroup::with_overrides("px", &["pl", "pr"]),
        ('p', "y") => UtilityGroup::with_overrides("py", &["pt", "pb"]),
        ('p', "t") => UtilityGroup::single("pt"),
        ('p', "b") => UtilityGroup::single("pb"),
        ('p', "l") => UtilityGroup::single("pl"),
        ('p', "r") => UtilityGroup::single("pr"),
        ('m', "") => UtilityGroup::with_overrides("m", &["mx", "my", "mt", "mb", "ml", "mr"]),
        ('m', "x") => UtilityGroup::with_overrides("mx", &["ml", "mr"]),
        ('m', "y") => UtilityGroup::with_overrides("my", &["mt", "mb"]),
        ('m', "t") => UtilityGroup::single("mt"),
        ('m', "b") => UtilityGroup::single("mb"),
        ('m', "l") => UtilityGroup::single("ml"),
        ('m', "r") => UtilityGroup::single("mr"),
        _ => return None,
    };
    Some(group)
}

/// Per-side border utilities: `border-x`, `border-t-2` (width) and `border-t-red-500` (colour).
fn border_side_group(rest: &str) -> Option<UtilityGroup> {
    let (side, value) = match rest.split_once('-') {
        Some((side, value)) => (side, Some(value)),
        None => (rest, None),
    };
    let (width, color) = match side {
        "x" => ("border-width-x", "border-color-x"),
        "y" => ("border-width-y", "border-color-y"),
        "t" => ("border-width-t", "border-color-t"),
        "b" => ("border-width-b", "border-color-b"),
        "l" => ("border-width-l", "border-color-l"),
        "r" => ("border-width-r", "border-color-r"),
        "s" => ("border-width-s", "border-color-s"),
        "e" => ("border-width-e", "border-color-e"),
        _ => return None,
    };
    let group = match value {
        Some(value) if !is_scale_value(value) => color,
        _ => width,
    };
    Some(UtilityGroup::single(group))
}

fn utility_group(utility: &str) -> Option<UtilityGroup> {
    if DISPLAYS.contains(&utility) {
        return Some(UtilityGroup::single("display"));
    }
    if DECORATIONS.contains(&utility) {
        return Some(UtilityGroup::single("text-decoration"));
    }
    if utility == "transition" || utility.starts_with("transition-") {
        return Some(UtilityGroup::single("transition"));
    }
    if utility == "outline" || utility.starts_with("outline-") {
        return Some(UtilityGroup::single("outline"));
    }
    if utility == "border" {
        return Some(UtilityGroup::single("border-width"));
    }
    if utility == "ring" {
        return Some(UtilityGroup::single("ring-width"));
    }
    if let Some(rest) = utility.strip_prefix("rounded") {
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        return RADII
            .contains(&rest)
            .then_some(UtilityGroup::single("rounded"));
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        let group = if FONT_SIZES.contains(&rest) {
            "font-size"
        } else if TEXT_ALIGNS.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        };
        return Some(UtilityGroup::single(group));
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        let group = if FONT_WEIGHTS.contains(&rest) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some(UtilityGroup::single(group));
    }
    if let Some(rest) = utility.strip_prefix("ring-offset-") {
        let group = if is_scale_value(rest) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        };
        return Some(UtilityGroup::single(group));
    }
    if let Some(rest) = utility.strip_prefix("ring-") {
        let group = if is_scale_value(rest) || rest == "inset" {
            "ring-width"
        } else {
            "ring-color"
        };
        return Some(UtilityGroup::single(group));
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if BORDER_STYLES.contains(&rest) {
            return Some(UtilityGroup::single("border-style"));
        }
        if let Some(group) = border_side_group(rest) {
            return Some(group);
        }
        let group = if is_scale_value(rest) {
            "border-width"
        } else {
            "border-color"
        };
        return Some(UtilityGroup::single(group));
    }

    let prefixed = [
        ("bg-", "bg-color"),
        ("h-", "height"),
        ("w-", "width"),
        ("gap-", "gap"),
        ("opacity-", "opacity"),
        ("pointer-events-", "pointer-events"),
        ("whitespace-", "whitespace"),
        ("items-", "align-items"),
        ("justify-", "justify-content"),
        ("underline-offset-", "underline-offset"),
    ];
    if let Some((_, group)) = prefixed
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
    {
        return Some(UtilityGroup::single(*group));
    }

    match utility.chars().next() {
        Some(family @ ('p' | 'm')) => spacing_group(utility, family),
        _ => None,
    }
}

/// Splits a class into its variant modifiers (`hover:`, `focus-visible:` ...) and the utility.
fn split_modifiers(class: &str) -> (&str, &str) {
    match class.rfind(':') {
        Some(index) => (&class[..=index], &class[index + 1..]),
        None => ("", class),
    }
}

/// Joins class lists, removing duplicates and resolving conflicting utilities.
///
/// Every part may itself hold several whitespace-separated classes. When two classes belong to
/// the same utility group under the same modifiers (for example `bg-primary` and `bg-accent`, or
/// `hover:bg-primary/90` and `hover:bg-accent`), only the one that appears last is kept. A later
/// `p-*` also removes earlier `px-*`/`py-*`, mirroring how the generated CSS would cascade.
/// Unrecognized classes are only de-duplicated. Output keeps the relative order of survivors.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let classes: Vec<&str> = parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut claimed: HashSet<String> = HashSet::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        if !seen.insert(class) {
            continue;
        }
        let (modifiers, utility) = split_modifiers(class.trim_start_matches('!'));
        if let Some(group) = utility_group(utility) {
            let key = format!("{modifiers}{}", group.name);
            if claimed.contains(&key) {
                continue;
            }
            claimed.insert(key);
            for overridden in group.overrides {
                claimed.insert(format!("{modifiers}{overridden}"));
            }
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_utility_in_same_group_wins() {
        assert_eq!(merge_classes(["bg-primary text-sm", "bg-accent"]), "text-sm bg-accent");
        assert_eq!(merge_classes(["h-10 px-4", "h-9 px-3"]), "h-9 px-3");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["bg-primary hover:bg-primary/90", "hover:bg-accent"]),
            "bg-primary hover:bg-accent"
        );
        assert_eq!(
            merge_classes(["focus-visible:ring-2 focus-visible:ring-ring", "ring-4"]),
            "focus-visible:ring-2 focus-visible:ring-ring ring-4"
        );
    }

    #[test]
    fn text_color_and_font_size_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-sm text-primary", "text-destructive"]),
            "text-sm text-destructive"
        );
        assert_eq!(merge_classes(["text-sm", "text-lg"]), "text-lg");
    }

    #[test]
    fn padding_shorthand_overrides_axis_only_when_later() {
        assert_eq!(merge_classes(["px-4 py-2", "p-0"]), "p-0");
        assert_eq!(merge_classes(["p-0", "px-4"]), "p-0 px-4");
    }

    #[test]
    fn border_width_and_color_are_independent() {
        assert_eq!(
            merge_classes(["border border-input", "border-2"]),
            "border-input border-2"
        );
        assert_eq!(
            merge_classes(["border-input", "border-t-2 border-red-500"]),
            "border-t-2 border-red-500"
        );
    }

    #[test]
    fn side_widths_keep_the_border_colour() {
        assert_eq!(
            merge_classes(["border border-input", "border-x"]),
            "border border-input border-x"
        );
        assert_eq!(merge_classes(["border-t", "border-t-4"]), "border-t-4");
        assert_eq!(
            merge_classes(["border-t-red-500 border-input", "border-t-blue-500"]),
            "border-input border-t-blue-500"
        );
    }

    #[test]
    fn border_styles_keep_the_border_colour() {
        assert_eq!(
            merge_classes(["border-input", "border-dashed"]),
            "border-input border-dashed"
        );
        assert_eq!(
            merge_classes(["border-dashed border-input", "border-none"]),
            "border-input border-none"
        );
    }

    #[test]
    fn ring_offset_groups_split_width_from_color() {
        assert_eq!(
            merge_classes(["ring-offset-background ring-offset-2", "ring-offset-4"]),
            "ring-offset-background ring-offset-4"
        );
    }

    #[test]
    fn duplicates_and_blank_parts_are_dropped() {
        assert_eq!(merge_classes(["", "  custom  custom", " ", "other"]), "custom other");
        assert_eq!(merge_classes(std::iter::empty::<&str>()), "");
    }

    #[test]
    fn display_utilities_conflict() {
        assert_eq!(merge_classes(["inline-flex items-center", "hidden"]), "items-center hidden");
    }
}
