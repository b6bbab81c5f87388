use leptos::html::AnyElement;
use leptos::*;

use crate::directive::{select_branch, ButtonBranch, ChildShape, LinkTarget, RenderDirective};
use crate::slot::forward_onto_child;
use crate::variants::{resolve, ButtonSize, ButtonVariant};

fn link_button(
    target: LinkTarget,
    class: String,
    variant: ButtonVariant,
    size: ButtonSize,
    nodes: Vec<View>,
) -> View {
    let LinkTarget { href, attrs } = target;
    let mut anchor = view! {
        <a
            href=href
            class=class
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {nodes}
        </a>
    };
    for (name, value) in attrs {
        anchor = anchor.attr(name, value);
    }
    anchor.into_view()
}

fn plain_button(
    class: String,
    variant: ButtonVariant,
    size: ButtonSize,
    attrs: Vec<(&'static str, Attribute)>,
    node_ref: Option<NodeRef<AnyElement>>,
    nodes: Vec<View>,
) -> View {
    let mut button = view! {
        <button
            class=class
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {nodes}
        </button>
    };
    for (name, value) in attrs {
        button = button.attr(name, value);
    }
    let button = button.into_any();
    match node_ref {
        Some(node_ref) => button.node_ref(node_ref).into_view(),
        None => button.into_view(),
    }
}

#[component]
/// Shared button with variant/size presets and three mutually exclusive render shapes.
///
/// * [`RenderDirective::AsLink`] renders an `<a>` carrying the button classes.
/// * [`RenderDirective::AsChild`] forwards classes, attributes and `node_ref` onto the single
///   child element. Without children it renders an empty `<button>`; with anything but one
///   element it logs a warning and renders a `<button>` around the original children.
/// * [`RenderDirective::Default`] renders a `<button>`.
///
/// Extra attributes given as `attr:name=value` land on the button or the forwarded child. The
/// `node_ref` handle stays owned by the caller and is never attached to the anchor shape.
pub fn Button(
    #[prop(optional, into)] directive: RenderDirective,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: Option<NodeRef<AnyElement>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = resolve(variant, size, class.as_deref());
    let nodes = children
        .map(|children| children().nodes)
        .unwrap_or_default();

    let branch = select_branch(directive, ChildShape::of(&nodes));
    if let Some(notice) = branch.diagnostic() {
        logging::warn!("{notice}");
    }

    match branch {
        ButtonBranch::Anchor(target) => link_button(target, class, variant, size, nodes),
        ButtonBranch::Slot => forward_onto_child(nodes, Some(class), attrs, node_ref),
        ButtonBranch::EmptyButton => {
            plain_button(class, variant, size, attrs, node_ref, Vec::new())
        }
        ButtonBranch::FallbackButton | ButtonBranch::Button => {
            plain_button(class, variant, size, attrs, node_ref, nodes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[component]
    fn SettingsLink() -> impl IntoView {
        view! { <a href="/settings">"Settings"</a> }
    }

    /// Drops comment markers and hydration keys so assertions only see the markup.
    fn strip_markers(html: &str) -> String {
        let mut markup = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(start) = rest.find("<!--") {
            markup.push_str(&rest[..start]);
            rest = rest[start..]
                .find("-->")
                .map_or("", |end| &rest[start + end + 3..]);
        }
        markup.push_str(rest);

        let mut cleaned = String::with_capacity(markup.len());
        let mut rest = markup.as_str();
        while let Some(start) = rest.find(" data-hk=\"") {
            cleaned.push_str(&rest[..start]);
            let value = &rest[start + " data-hk=\"".len()..];
            rest = value.find('"').map_or("", |end| &value[end + 1..]);
        }
        cleaned.push_str(rest);
        cleaned.trim().to_string()
    }

    fn render(build: impl FnOnce() -> View) -> String {
        let runtime = create_runtime();
        let html = build().render_to_string().to_string();
        runtime.dispose();
        strip_markers(&html)
    }

    fn default_classes() -> String {
        resolve(ButtonVariant::Default, ButtonSize::Default, None)
    }

    #[test]
    fn link_directive_renders_anchor_with_resolved_classes() {
        let html = render(|| {
            view! { <Button directive=LinkTarget::new("https://example.com")>"Docs"</Button> }
                .into_view()
        });
        assert!(html.starts_with("<a"), "{html}");
        assert!(!html.contains("<button"), "{html}");
        assert!(html.contains("href=\"https://example.com\""), "{html}");
        assert!(html.contains(&format!("class=\"{}\"", default_classes())), "{html}");
        assert!(html.contains("Docs"), "{html}");
    }

    #[test]
    fn link_wins_over_as_child() {
        let html = render(|| {
            let directive =
                RenderDirective::from_flags(Some(LinkTarget::new("https://example.com")), true);
            view! {
                <Button directive=directive>
                    <span>"Docs"</span>
                </Button>
            }
            .into_view()
        });
        assert!(html.starts_with("<a"), "{html}");
        assert!(html.contains("href=\"https://example.com\""), "{html}");
        assert!(html.contains("<span>Docs</span>"), "{html}");
        assert!(!html.contains("<button"), "{html}");
    }

    #[test]
    fn as_child_without_children_renders_empty_button() {
        let html = render(|| view! { <Button directive=RenderDirective::AsChild /> }.into_view());
        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains("data-ui-kind=\"button\""), "{html}");
        assert!(html.ends_with("\"></button>"), "{html}");
    }

    #[test]
    fn as_child_forwards_onto_single_element() {
        let html = render(|| {
            view! {
                <Button directive=RenderDirective::AsChild variant=ButtonVariant::Secondary>
                    <a href="/orders">"Orders"</a>
                </Button>
            }
            .into_view()
        });
        assert!(html.starts_with("<a"), "{html}");
        assert!(!html.contains("<button"), "{html}");
        assert!(html.contains("href=\"/orders\""), "{html}");
        assert!(html.contains("bg-secondary"), "{html}");
        assert!(html.contains("inline-flex"), "{html}");
        assert!(html.contains("Orders"), "{html}");
    }

    #[test]
    fn as_child_forwards_through_a_component_child() {
        let html = render(|| {
            view! {
                <Button directive=RenderDirective::AsChild>
                    <SettingsLink />
                </Button>
            }
            .into_view()
        });
        assert!(html.starts_with("<a"), "{html}");
        assert!(!html.contains("<button"), "{html}");
        assert!(html.contains("href=\"/settings\""), "{html}");
        assert!(html.contains("bg-primary"), "{html}");
    }

    #[test]
    fn as_child_with_two_children_falls_back_to_button() {
        let html = render(|| {
            view! {
                <Button directive=RenderDirective::AsChild>
                    <span>"one"</span>
                    <span>"two"</span>
                </Button>
            }
            .into_view()
        });
        let open = html.find("<button").expect("button element");
        let close = html.find("</button>").expect("closing tag");
        let one = html.find("<span>one</span>").expect("first child");
        let two = html.find("<span>two</span>").expect("second child");
        assert!(open < one && one < two && two < close, "{html}");
    }

    #[test]
    fn default_button_carries_passthrough_attributes() {
        let html = render(|| {
            view! {
                <Button size=ButtonSize::Lg class="w-full" attr:type="submit">
                    "Save"
                </Button>
            }
            .into_view()
        });
        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains("type=\"submit\""), "{html}");
        assert!(html.contains("data-ui-size=\"lg\""), "{html}");
        assert!(html.contains("h-11 rounded-md px-8 w-full"), "{html}");
        assert!(html.contains("Save"), "{html}");
    }

    #[test]
    fn rendering_is_repeatable() {
        let build = || {
            view! {
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon>
                    "x"
                </Button>
            }
            .into_view()
        };
        assert_eq!(render(build), render(build));
    }
}
