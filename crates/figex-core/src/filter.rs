//! Pluggable node filters

use figex_types::Node;

/// A filter over document nodes: either exact name equality or an
/// arbitrary predicate, resolved into one uniform test before traversal.
///
/// A panicking user predicate propagates and aborts the traversal; it is
/// not caught internally.
pub enum NodeFilter {
    /// Accept nodes whose name equals the given string
    Name(String),
    /// Accept nodes for which the predicate returns true
    Predicate(Box<dyn Fn(&Node) -> bool + Send + Sync>),
}

impl NodeFilter {
    /// Filter by exact name equality
    pub fn name(name: impl Into<String>) -> Self {
        NodeFilter::Name(name.into())
    }

    /// Filter by an arbitrary predicate over the node
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        NodeFilter::Predicate(Box::new(predicate))
    }

    /// Test a node against this filter
    pub fn accepts(&self, node: &Node) -> bool {
        match self {
            NodeFilter::Name(name) => node.name == *name,
            NodeFilter::Predicate(predicate) => predicate(node),
        }
    }

    /// Test a node against an optional filter; absence accepts everything
    pub fn accepts_opt(filter: Option<&NodeFilter>, node: &Node) -> bool {
        filter.map_or(true, |f| f.accepts(node))
    }
}

impl std::fmt::Debug for NodeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeFilter::Name(name) => f.debug_tuple("Name").field(name).finish(),
            NodeFilter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for NodeFilter {
    fn from(name: &str) -> Self {
        NodeFilter::Name(name.to_string())
    }
}

impl From<String> for NodeFilter {
    fn from(name: String) -> Self {
        NodeFilter::Name(name)
    }
}
