//! LayoutNode - the nested child description a container is built from.
//!
//! A description is a tree of three shapes: one view, an ordered group of
//! descriptions, or nothing. It is evaluated eagerly and flattened once,
//! right before the children are attached.
//!
//! ```
//! use spark_flex::{LayoutNode, View, nodes, when};
//!
//! let a = View::new();
//! let b = View::new();
//! let c = View::new();
//!
//! let description = nodes![a, nodes![b, when(false, View::new)], vec![c]];
//! assert_eq!(description.flatten(), vec![a, b, c]);
//! assert!(LayoutNode::empty().flatten().is_empty());
//! ```

use crate::flex::Flex;
use crate::view::View;

use super::control_flow::{either, when};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LayoutNode {
    /// A single view.
    Leaf(View),
    /// Ordered nested descriptions.
    Group(Vec<LayoutNode>),
    /// A branch that was not taken; contributes nothing.
    #[default]
    Absent,
}

impl LayoutNode {
    /// An empty group.
    pub fn empty() -> Self {
        Self::Group(Vec::new())
    }

    /// All leaves in declared order, at any depth. Absent nodes are skipped.
    pub fn flatten(&self) -> Vec<View> {
        let mut views = Vec::new();
        self.collect_into(&mut views);
        views
    }

    fn collect_into(&self, views: &mut Vec<View>) {
        match self {
            Self::Leaf(view) => views.push(*view),
            Self::Group(nodes) => {
                for node in nodes {
                    node.collect_into(views);
                }
            }
            Self::Absent => {}
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<View> for LayoutNode {
    fn from(view: View) -> Self {
        Self::Leaf(view)
    }
}

impl From<Flex> for LayoutNode {
    fn from(flex: Flex) -> Self {
        Self::Leaf(flex.view())
    }
}

impl<T: Into<LayoutNode>> From<Option<T>> for LayoutNode {
    fn from(node: Option<T>) -> Self {
        node.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<LayoutNode>> From<Vec<T>> for LayoutNode {
    fn from(nodes: Vec<T>) -> Self {
        Self::Group(nodes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<LayoutNode>, const N: usize> From<[T; N]> for LayoutNode {
    fn from(nodes: [T; N]) -> Self {
        Self::Group(nodes.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<LayoutNode>> FromIterator<T> for LayoutNode {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Group(iter.into_iter().map(Into::into).collect())
    }
}

/// Build a `LayoutNode::Group` from a list of anything that converts into
/// a node.
#[macro_export]
macro_rules! nodes {
    () => {
        $crate::LayoutNode::empty()
    };
    ($($node:expr),+ $(,)?) => {
        $crate::LayoutNode::Group(vec![$($crate::LayoutNode::from($node)),+])
    };
}

// =============================================================================
// Children builder
// =============================================================================

/// Fluent alternative to `nodes!` when children are declared step by step.
///
/// ```
/// use spark_flex::{Children, View};
///
/// let title = View::new();
/// let badge = View::new();
/// let show_badge = false;
///
/// let children = Children::new()
///     .child(title)
///     .child_if(show_badge, || badge)
///     .build();
/// assert_eq!(children.flatten(), vec![title]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Children {
    nodes: Vec<LayoutNode>,
}

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, node: impl Into<LayoutNode>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Add the node built by `f` only when `condition` holds.
    pub fn child_if<N: Into<LayoutNode>>(mut self, condition: bool, f: impl FnOnce() -> N) -> Self {
        self.nodes.push(when(condition, f));
        self
    }

    /// Add one of two branches.
    pub fn either<A, B>(
        mut self,
        condition: bool,
        then_fn: impl FnOnce() -> A,
        else_fn: impl FnOnce() -> B,
    ) -> Self
    where
        A: Into<LayoutNode>,
        B: Into<LayoutNode>,
    {
        self.nodes.push(either(condition, then_fn, else_fn));
        self
    }

    pub fn extend<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LayoutNode>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> LayoutNode {
        LayoutNode::Group(self.nodes)
    }
}

impl From<Children> for LayoutNode {
    fn from(children: Children) -> Self {
        children.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;

    #[test]
    fn test_single_leaf() {
        reset_registry();

        let a = View::new();
        assert_eq!(LayoutNode::from(a).flatten(), vec![a]);
    }

    #[test]
    fn test_absent_contributes_nothing() {
        reset_registry();

        let a = View::new();
        let b = View::new();
        let node = nodes![a, LayoutNode::Absent, b];
        assert_eq!(node.flatten(), vec![a, b]);
        assert!(LayoutNode::from(None::<View>).is_absent());
    }

    #[test]
    fn test_deep_nesting_keeps_order() {
        reset_registry();

        let views: Vec<View> = (0..5).map(|_| View::new()).collect();
        let node = nodes![
            views[0],
            nodes![nodes![views[1], nodes![views[2]]], views[3]],
            nodes![nodes![nodes![views[4]]]],
        ];
        assert_eq!(node.flatten(), views);
    }

    #[test]
    fn test_children_builder() {
        reset_registry();

        let a = View::new();
        let b = View::new();
        let c = View::new();
        let d = View::new();

        let node = Children::new()
            .child(a)
            .child_if(true, || b)
            .child_if(false, View::new)
            .either(false, View::new, || c)
            .extend([Some(d), None])
            .build();
        assert_eq!(node.flatten(), vec![a, b, c, d]);
    }

    #[test]
    fn test_from_iterator() {
        reset_registry();

        let views = [View::new(), View::new()];
        let node: LayoutNode = views.iter().copied().collect();
        assert_eq!(node.flatten(), views.to_vec());
    }
}
