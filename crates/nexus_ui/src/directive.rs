//! Render-shape selection for [`Button`](crate::Button).

use leptos::View;

/// Notice emitted when `as_child` rendering cannot forward onto a single element child.
pub const FALLBACK_NOTICE: &str =
    "Button with as_child expected a single element child. Falling back to regular button.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Anchor target and anchor-only attributes for link-shaped buttons.
pub struct LinkTarget {
    /// Destination URL.
    pub href: String,
    /// Extra anchor attributes (`target`, `rel`, `download`, ...) copied onto the `<a>`.
    pub attrs: Vec<(&'static str, String)>,
}

impl LinkTarget {
    /// Creates a link target without extra attributes.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            attrs: Vec::new(),
        }
    }

    /// Adds one anchor attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Opens the link in a new browsing context with a safe `rel`.
    pub fn external(self) -> Self {
        self.attr("target", "_blank").attr("rel", "noopener noreferrer")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Mutually exclusive rendering modes for a button.
pub enum RenderDirective {
    /// Render an anchor pointing at the target.
    AsLink(LinkTarget),
    /// Forward classes and attributes onto the single child element.
    AsChild,
    /// Render a plain `<button>`.
    #[default]
    Default,
}

impl RenderDirective {
    /// Builds a directive from loose flags.
    ///
    /// A link with a non-empty `href` takes precedence over `as_child`. A link with an empty
    /// `href` is ignored, as if it had not been supplied.
    pub fn from_flags(as_link: Option<LinkTarget>, as_child: bool) -> Self {
        match as_link {
            Some(target) if !target.href.is_empty() => Self::AsLink(target),
            _ if as_child => Self::AsChild,
            _ => Self::Default,
        }
    }
}

impl From<LinkTarget> for RenderDirective {
    fn from(target: LinkTarget) -> Self {
        Self::from_flags(Some(target), false)
    }
}

fn is_unit(node: &View) -> bool {
    matches!(node, View::CoreComponent(leptos::leptos_dom::CoreComponent::Unit(_)))
}

/// Drops nodes that render nothing.
pub(crate) fn significant_nodes(nodes: Vec<View>) -> Vec<View> {
    nodes.into_iter().filter(|node| !is_unit(node)).collect()
}

/// Whether the node is an element, or a component/fragment wrapping exactly one element.
pub(crate) fn is_element(node: &View) -> bool {
    match node {
        View::Element(_) => true,
        View::Component(component) => {
            let mut inner = component.children.iter().filter(|child| !is_unit(child));
            matches!((inner.next(), inner.next()), (Some(child), None) if is_element(child))
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shape of the children passed to a button, as far as branch selection cares.
pub enum ChildShape {
    /// No children.
    Empty,
    /// Exactly one child, and it is an element (possibly behind a component or fragment).
    SingleElement,
    /// Several children, or a single non-element child (text, multi-node component).
    Other {
        /// Number of top-level child nodes.
        count: usize,
    },
}

impl ChildShape {
    /// Classifies a child count and whether the first child is an element.
    pub fn from_parts(count: usize, first_is_element: bool) -> Self {
        match count {
            0 => Self::Empty,
            1 if first_is_element => Self::SingleElement,
            count => Self::Other { count },
        }
    }

    /// Classifies rendered child nodes, ignoring unit nodes.
    pub fn of(nodes: &[View]) -> Self {
        let significant: Vec<&View> = nodes.iter().filter(|node| !is_unit(node)).collect();
        Self::from_parts(
            significant.len(),
            significant.first().is_some_and(|node| is_element(node)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The concrete output a button render produces.
pub enum ButtonBranch {
    /// `<a href>` with the children nested.
    Anchor(LinkTarget),
    /// Childless `<button>` (as-child with nothing to forward onto).
    EmptyButton,
    /// Classes and attributes forwarded onto the only child element.
    Slot,
    /// `<button>` holding the original children after a rejected as-child render.
    FallbackButton,
    /// `<button>` with the children nested.
    Button,
}

impl ButtonBranch {
    /// Diagnostic notice the branch emits, if any.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Self::FallbackButton => Some(FALLBACK_NOTICE),
            _ => None,
        }
    }
}

/// Picks the render branch for a directive and the shape of its children.
///
/// `children` is only consulted for [`RenderDirective::AsChild`]. An `AsLink` with an empty
/// `href` renders a plain button.
pub fn select_branch(directive: RenderDirective, children: ChildShape) -> ButtonBranch {
    match directive {
        RenderDirective::AsLink(target) if !target.href.is_empty() => ButtonBranch::Anchor(target),
        RenderDirective::AsLink(_) | RenderDirective::Default => ButtonBranch::Button,
        RenderDirective::AsChild => match children {
            ChildShape::Empty => ButtonBranch::EmptyButton,
            ChildShape::SingleElement => ButtonBranch::Slot,
            ChildShape::Other { .. } => ButtonBranch::FallbackButton,
        },
    }
}
