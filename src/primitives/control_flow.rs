//! Control Flow - conditional and repeated children.
//!
//! These helpers evaluate eagerly: a branch closure runs only if its
//! branch is taken, and the result is a plain `LayoutNode`.

use super::node::LayoutNode;

/// The node built by `f` when `condition` holds, otherwise `Absent`.
///
/// ```
/// use spark_flex::{View, nodes, when};
///
/// let logged_in = false;
/// let avatar = View::new();
/// assert!(nodes![when(logged_in, || avatar)].flatten().is_empty());
/// ```
pub fn when<N: Into<LayoutNode>>(condition: bool, f: impl FnOnce() -> N) -> LayoutNode {
    if condition { f().into() } else { LayoutNode::Absent }
}

/// One of two branches.
pub fn either<A, B>(
    condition: bool,
    then_fn: impl FnOnce() -> A,
    else_fn: impl FnOnce() -> B,
) -> LayoutNode
where
    A: Into<LayoutNode>,
    B: Into<LayoutNode>,
{
    if condition {
        then_fn().into()
    } else {
        else_fn().into()
    }
}

/// One node per item, in iteration order.
pub fn each<I, N>(items: I, f: impl FnMut(I::Item) -> N) -> LayoutNode
where
    I: IntoIterator,
    N: Into<LayoutNode>,
{
    items.into_iter().map(f).collect()
}
