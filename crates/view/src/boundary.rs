//! A render-tree model of the search page that does not depend on Yew.
//!
//! The Yew components in [`pages`](crate::pages) let the framework decide when a suspended child
//! is ready. This module states the same behaviour explicitly: a [`Node::Boundary`] shows its
//! fallback while the [`ViewProvider`] behind its child reports [`Readiness::Pending`] and shows
//! the child once it reports [`Readiness::Ready`]. A [`Renderer`] turns a declared tree into
//! visible output, polling providers as it goes.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Classes of the page container.
pub const CONTAINER_CLASSES: &str = "container mx-auto px-4 py-8";
/// Content shown while the results are loading.
pub const FALLBACK_TEXT: &str = "Loading...";
/// Name of the view that produces the results.
pub const RESULTS_VIEW: &str = "SearchResults";

/// A node of a declared render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with optional classes.
    Element {
        /// Tag name.
        tag: Cow<'static, str>,
        /// Value of the class attribute.
        class: Option<Cow<'static, str>>,
        /// Child nodes.
        children: Vec<Node>,
    },
    /// Static text.
    Text(Cow<'static, str>),
    /// A suspension boundary.
    Boundary {
        /// Shown while the child is pending.
        fallback: Box<Node>,
        /// Shown once ready.
        child: Box<Node>,
    },
    /// A reference to a view rendered by a [`ViewProvider`].
    View(Cow<'static, str>),
}

impl Node {
    /// Creates an element without classes.
    pub fn element<T>(tag: T, children: Vec<Node>) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self::Element {
            tag: tag.into(),
            class: None,
            children,
        }
    }

    /// Creates an element with classes.
    pub fn element_with_class<T, C>(tag: T, class: C, children: Vec<Node>) -> Self
    where
        T: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        Self::Element {
            tag: tag.into(),
            class: Some(class.into()),
            children,
        }
    }

    /// Creates a text node.
    pub fn text<S>(s: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::Text(s.into())
    }

    /// Creates a suspension boundary.
    pub fn boundary(fallback: Node, child: Node) -> Self {
        Self::Boundary {
            fallback: fallback.into(),
            child: child.into(),
        }
    }

    /// Creates a reference to a view.
    pub fn view<S>(name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::View(name.into())
    }

    /// Returns `true` if this is the page container.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Element { class: Some(m), .. } if m == CONTAINER_CLASSES)
    }

    /// Returns `true` if this is a suspension boundary.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary { .. })
    }

    /// Counts the nodes in this tree, including itself, that match a predicate.
    pub fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&Node) -> bool,
    {
        fn count_inner(node: &Node, f: &dyn Fn(&Node) -> bool) -> usize {
            let own = usize::from(f(node));

            own + match node {
                Node::Element { children, .. } => {
                    children.iter().map(|m| count_inner(m, f)).sum::<usize>()
                }
                Node::Boundary { fallback, child } => {
                    count_inner(fallback, f) + count_inner(child, f)
                }
                Node::Text(_) | Node::View(_) => 0,
            }
        }

        count_inner(self, &f)
    }
}

/// The declared tree of the search page.
///
/// A padded, centred container holding a single boundary. The boundary falls back to
/// [`FALLBACK_TEXT`] and wraps the [`RESULTS_VIEW`].
pub fn search_page() -> Node {
    Node::element_with_class(
        "div",
        CONTAINER_CLASSES,
        vec![Node::boundary(
            Node::element("div", vec![Node::text(FALLBACK_TEXT)]),
            Node::view(RESULTS_VIEW),
        )],
    )
}

/// A failure reported by a view provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ViewError {
    message: String,
}

impl ViewError {
    /// Creates an error with a message.
    pub fn new<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
        }
    }
}

/// The state of a view when it is polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// The view is still working.
    Pending,
    /// The view is ready with its content.
    Ready(Node),
    /// The view has failed.
    Failed(ViewError),
}

/// Produces the content of a [`Node::View`].
pub trait ViewProvider {
    /// Polls the view for its content.
    fn poll(&mut self) -> Readiness;
}

impl<F> ViewProvider for F
where
    F: FnMut() -> Readiness,
{
    fn poll(&mut self) -> Readiness {
        self()
    }
}

/// What a boundary shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryState {
    /// The child is pending.
    #[default]
    ShowingFallback,
    /// The child is ready.
    ShowingContent,
}

impl BoundaryState {
    /// Moves to the next state after the child has been polled.
    ///
    /// Once showing content, a boundary never goes back to its fallback.
    pub fn advance(self, readiness: &Readiness) -> Self {
        match (self, readiness) {
            (Self::ShowingContent, _) | (Self::ShowingFallback, Readiness::Ready(_)) => {
                Self::ShowingContent
            }
            (Self::ShowingFallback, Readiness::Pending | Readiness::Failed(_)) => {
                Self::ShowingFallback
            }
        }
    }
}

/// Errors surfaced by a [`Renderer`].
///
/// These are meant for whatever error boundary surrounds the page; the page itself does not
/// handle them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No provider has been registered for a view.
    #[error("no provider for view `{0}`")]
    UnknownView(String),

    /// A view is pending but is not inside a boundary.
    #[error("view `{0}` suspended outside of a boundary")]
    Unbounded(String),

    /// A provider has failed.
    #[error("view `{view}` failed")]
    ViewFailed {
        /// Name of the view.
        view: String,
        /// The provider's error.
        #[source]
        source: ViewError,
    },
}

/// The rendering runtime.
pub trait Renderer {
    /// The visible output.
    type Output;

    /// Renders a declared tree.
    fn render(&mut self, tree: &Node) -> Result<Self::Output, RenderError>;
}

/// The output of a [`TextRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// The visible text, concatenated in document order.
    pub text: String,
    /// The state of each visible boundary, in document order.
    pub boundaries: Vec<BoundaryState>,
}

enum Walk {
    Complete,
    Suspended(String),
}

/// A [`Renderer`] that outputs the visible text of a tree.
#[derive(Default)]
pub struct TextRenderer {
    views: BTreeMap<String, Box<dyn ViewProvider>>,
}

impl fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRenderer")
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TextRenderer {
    /// Creates a renderer without any views.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the provider of a view.
    pub fn with_view<S, P>(mut self, name: S, provider: P) -> Self
    where
        S: Into<String>,
        P: 'static + ViewProvider,
    {
        self.views.insert(name.into(), Box::new(provider));
        self
    }

    fn walk(&mut self, node: &Node, frame: &mut Frame) -> Result<Walk, RenderError> {
        match node {
            Node::Text(m) => frame.text.push_str(m),

            Node::Element { children, .. } => {
                for child in children {
                    if let Walk::Suspended(m) = self.walk(child, frame)? {
                        return Ok(Walk::Suspended(m));
                    }
                }
            }

            Node::View(name) => {
                let provider = self
                    .views
                    .get_mut(name.as_ref())
                    .ok_or_else(|| RenderError::UnknownView(name.to_string()))?;

                match provider.poll() {
                    Readiness::Pending => return Ok(Walk::Suspended(name.to_string())),
                    Readiness::Failed(source) => {
                        return Err(RenderError::ViewFailed {
                            view: name.to_string(),
                            source,
                        })
                    }
                    Readiness::Ready(content) => return self.walk(&content, frame),
                }
            }

            Node::Boundary { fallback, child } => {
                let mut content = Frame::default();
                let readiness = match self.walk(child, &mut content)? {
                    Walk::Complete => Readiness::Ready(Node::text(content.text.clone())),
                    Walk::Suspended(_) => Readiness::Pending,
                };

                let state = BoundaryState::default().advance(&readiness);
                frame.boundaries.push(state);

                match state {
                    BoundaryState::ShowingContent => {
                        frame.text.push_str(&content.text);
                        frame.boundaries.extend(content.boundaries);
                    }
                    BoundaryState::ShowingFallback => {
                        if let Walk::Suspended(m) = self.walk(fallback, frame)? {
                            return Ok(Walk::Suspended(m));
                        }
                    }
                }
            }
        }

        Ok(Walk::Complete)
    }
}

impl Renderer for TextRenderer {
    type Output = Frame;

    fn render(&mut self, tree: &Node) -> Result<Frame, RenderError> {
        let mut frame = Frame::default();

        match self.walk(tree, &mut frame)? {
            Walk::Complete => Ok(frame),
            Walk::Suspended(m) => Err(RenderError::Unbounded(m)),
        }
    }
}
