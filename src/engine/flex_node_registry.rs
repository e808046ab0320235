//! FlexNode Registry - Manages FlexNode lifecycle and owns the layout tree.
//!
//! A view gets a FlexNode the first time its flex properties are touched.
//! The registry tracks the index → FlexNode mapping, the caller-side
//! `NodeStyle` of every node, and the single taffy tree that every node
//! lives in. Setters only write the `NodeStyle`; the layout bridge pushes
//! the resolved style into taffy.

use std::cell::RefCell;
use std::collections::HashMap;

use taffy::{NodeId, Style, TaffyTree};

use super::arrays::core as core_arrays;
use super::flex_node::{FlexNode, NodeStyle, default_style};
use super::registry::is_allocated;
use crate::error::{FlexError, FlexResult};
use crate::types::LayoutDirection;

// =============================================================================
// Registry State
// =============================================================================

/// Layout engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Round computed positions and sizes to whole points.
    pub rounding: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { rounding: true }
    }
}

thread_local! {
    /// Map view index → FlexNode
    static FLEX_NODES: RefCell<HashMap<usize, FlexNode>> = RefCell::new(HashMap::new());

    /// Map view index → style as the caller set it
    static NODE_STYLES: RefCell<HashMap<usize, NodeStyle>> = RefCell::new(HashMap::new());

    /// Layout tree; the node context is the view index.
    static TREE: RefCell<TaffyTree<usize>> = RefCell::new(TaffyTree::new());

    static CONFIG: RefCell<LayoutConfig> = RefCell::new(LayoutConfig::default());
}

fn apply_config(tree: &mut TaffyTree<usize>, config: LayoutConfig) {
    if config.rounding {
        tree.enable_rounding();
    } else {
        tree.disable_rounding();
    }
}

/// Apply layout engine settings for this thread.
pub fn configure(config: LayoutConfig) {
    CONFIG.with(|c| *c.borrow_mut() = config);
    TREE.with(|tree| apply_config(&mut tree.borrow_mut(), config));
}

/// Current layout engine settings.
pub fn layout_config() -> LayoutConfig {
    CONFIG.with(|c| *c.borrow())
}

/// Run `f` with the layout tree.
pub(crate) fn with_tree<R>(f: impl FnOnce(&mut TaffyTree<usize>) -> R) -> R {
    TREE.with(|tree| f(&mut tree.borrow_mut()))
}

// =============================================================================
// FlexNode Lifecycle
// =============================================================================

/// Create the FlexNode for a view, or return the existing one.
pub fn create_flex_node(index: usize) -> FlexResult<FlexNode> {
    if let Some(node) = get_flex_node(index) {
        return Ok(node);
    }
    if !is_allocated(index) {
        return Err(FlexError::UnknownView(index));
    }

    let node = with_tree(|tree| tree.new_leaf_with_context(default_style(), index))?;
    let flex_node = FlexNode::new(index, node);
    FLEX_NODES.with(|nodes| {
        nodes.borrow_mut().insert(index, flex_node);
    });
    NODE_STYLES.with(|styles| {
        styles.borrow_mut().insert(index, NodeStyle::default());
    });
    Ok(flex_node)
}

/// Destroy a view's FlexNode and remove it from the layout tree.
pub fn destroy_flex_node(index: usize) {
    let removed = FLEX_NODES.with(|nodes| nodes.borrow_mut().remove(&index));
    NODE_STYLES.with(|styles| styles.borrow_mut().remove(&index));
    if let Some(flex_node) = removed {
        if let Err(err) = with_tree(|tree| tree.remove(flex_node.node)) {
            tracing::warn!(index, %err, "layout node already gone");
        }
    }
}

/// Get FlexNode for a view index.
pub fn get_flex_node(index: usize) -> Option<FlexNode> {
    FLEX_NODES.with(|nodes| nodes.borrow().get(&index).copied())
}

/// Mutate the side record of a view's FlexNode, creating it if needed.
pub fn update_flex_node(index: usize, f: impl FnOnce(&mut FlexNode)) -> FlexResult<()> {
    create_flex_node(index)?;
    FLEX_NODES.with(|nodes| {
        if let Some(node) = nodes.borrow_mut().get_mut(&index) {
            f(node);
        }
    });
    Ok(())
}

/// Get the number of FlexNodes currently in the registry.
pub fn flex_node_count() -> usize {
    FLEX_NODES.with(|nodes| nodes.borrow().len())
}

/// Drop every FlexNode and start a fresh layout tree (for testing).
pub fn reset_flex_nodes() {
    FLEX_NODES.with(|nodes| nodes.borrow_mut().clear());
    NODE_STYLES.with(|styles| styles.borrow_mut().clear());
    let config = layout_config();
    TREE.with(|tree| {
        let mut fresh = TaffyTree::new();
        apply_config(&mut fresh, config);
        *tree.borrow_mut() = fresh;
    });
}

// =============================================================================
// Style Access
// =============================================================================

/// Read-modify-write the caller-side style of a view.
///
/// The taffy node is marked dirty; the new values reach taffy on the next
/// layout pass.
pub fn update_node_style(index: usize, f: impl FnOnce(&mut NodeStyle)) -> FlexResult<()> {
    let flex_node = create_flex_node(index)?;
    NODE_STYLES.with(|styles| {
        if let Some(node_style) = styles.borrow_mut().get_mut(&index) {
            f(node_style);
        }
    });
    with_tree(|tree| tree.mark_dirty(flex_node.node))?;
    Ok(())
}

/// Read-modify-write the physical style of a view.
pub fn update_style(index: usize, f: impl FnOnce(&mut Style)) -> FlexResult<()> {
    update_node_style(index, |node_style| f(&mut node_style.style))
}

/// The caller-side style of a view.
///
/// Views that never had a flex property set report the defaults.
pub fn get_node_style(index: usize) -> NodeStyle {
    NODE_STYLES
        .with(|styles| styles.borrow().get(&index).cloned())
        .unwrap_or_default()
}

/// The physical style of a view, as set (start/end not applied).
pub fn get_style(index: usize) -> Style {
    get_node_style(index).style
}

/// Push `style` to a taffy node unless it already has it.
///
/// Pushing marks the node dirty, so unchanged styles keep the cache.
pub(crate) fn push_style(node: NodeId, style: Style) -> FlexResult<()> {
    with_tree(|tree| -> FlexResult<()> {
        if *tree.style(node)? != style {
            tree.set_style(node, style)?;
        }
        Ok(())
    })
}

/// First explicit layout direction on the way up the hierarchy; LTR when
/// nothing sets one.
pub fn resolved_layout_direction(index: usize) -> LayoutDirection {
    let mut current = Some(index);
    while let Some(idx) = current {
        match get_flex_node(idx).map(|node| node.layout_direction) {
            Some(LayoutDirection::Ltr) => return LayoutDirection::Ltr,
            Some(LayoutDirection::Rtl) => return LayoutDirection::Rtl,
            _ => current = core_arrays::get_parent_index(idx),
        }
    }
    LayoutDirection::Ltr
}

/// Invalidate the cached layout of a view (propagates to the root).
pub fn mark_dirty(index: usize) -> FlexResult<()> {
    let flex_node = create_flex_node(index)?;
    with_tree(|tree| tree.mark_dirty(flex_node.node))?;
    Ok(())
}

/// Whether a view's cached layout must be recomputed.
pub fn is_dirty(index: usize) -> FlexResult<bool> {
    let flex_node = create_flex_node(index)?;
    Ok(with_tree(|tree| tree.dirty(flex_node.node))?)
}
