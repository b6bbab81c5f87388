use leptos::html::AnyElement;
use leptos::*;

use crate::directive::{is_element, significant_nodes};

/// Unwraps components and fragments down to their single element.
fn into_element(node: View) -> Result<HtmlElement<AnyElement>, View> {
    if !is_element(&node) {
        return Err(node);
    }
    match node {
        View::Component(mut component) => {
            match significant_nodes(std::mem::take(&mut component.children)).pop() {
                Some(child) => into_element(child),
                None => Err(().into_view()),
            }
        }
        node => node.into_html_element(),
    }
}

/// Merges classes, attributes and a node ref onto the single element in `nodes`.
///
/// Unit nodes are ignored. Anything other than exactly one element (directly or behind a
/// component) is rendered unchanged.
pub(crate) fn forward_onto_child(
    nodes: Vec<View>,
    class: Option<String>,
    attrs: Vec<(&'static str, Attribute)>,
    node_ref: Option<NodeRef<AnyElement>>,
) -> View {
    let mut nodes = significant_nodes(nodes);
    if nodes.len() != 1 {
        return nodes.into_view();
    }
    let Some(node) = nodes.pop() else {
        return ().into_view();
    };

    match into_element(node) {
        Ok(mut element) => {
            if let Some(class) = class.filter(|class| !class.is_empty()) {
                element = element.classes(class);
            }
            for (name, value) in attrs {
                element = element.attr(name, value);
            }
            if let Some(node_ref) = node_ref {
                element = element.node_ref(node_ref);
            }
            element.into_view()
        }
        Err(node) => node,
    }
}

#[component]
/// Renders its only child element with the slot's classes and attributes merged onto it.
///
/// No wrapper element is emitted. Children that are not a single element pass through untouched.
pub fn Slot(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: Option<NodeRef<AnyElement>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    forward_onto_child(children().nodes, class, attrs, node_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Card() -> impl IntoView {
        view! { <div class="card">"Order #1001"</div> }
    }

    fn render(build: impl FnOnce() -> View) -> String {
        let runtime = create_runtime();
        let html = build().render_to_string().to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn slot_merges_onto_a_component_element_without_wrapper() {
        let html = render(|| {
            view! {
                <Slot class="ring-2" attr:data-state="open">
                    <Card />
                </Slot>
            }
            .into_view()
        });
        assert!(html.contains("<div"), "{html}");
        assert!(html.contains("card"), "{html}");
        assert!(html.contains("ring-2"), "{html}");
        assert!(html.contains("data-state=\"open\""), "{html}");
        assert_eq!(html.matches("<div").count(), 1, "{html}");
    }

    #[test]
    fn slot_leaves_text_children_untouched() {
        let html = render(|| view! { <Slot class="ring-2">"plain"</Slot> }.into_view());
        assert!(html.contains("plain"), "{html}");
        assert!(!html.contains("ring-2"), "{html}");
    }
}
