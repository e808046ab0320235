//! Builder Primitives - describe a container's children, then attach them.
//!
//! This module provides:
//! - [`LayoutNode`] - nested child description (leaf, group, or absent)
//! - [`Children`] and [`nodes!`](crate::nodes) - ways to build one
//! - [`when`], [`either`], [`each`] - conditional and repeated children
//! - [`FlexLayout`] - a container built from a description
//!
//! # Example
//!
//! ```
//! use spark_flex::{Direction, FlexLayout, LayoutMode, Rect, View, each, nodes};
//!
//! let root = View::new();
//! root.set_frame(Rect::new(0.0, 0.0, 200.0, 0.0));
//!
//! root.build(nodes![
//!     View::new().flex().height(20.0),
//!     FlexLayout::new(Direction::Horizontal, each(0..3, |_| View::new().flex().square(10.0))).unwrap(),
//! ])
//! .unwrap()
//! .layout(LayoutMode::AdjustHeight)
//! .unwrap();
//!
//! assert_eq!(root.frame().height(), 30.0);
//! ```

mod control_flow;
mod flex_layout;
mod node;

pub use control_flow::{each, either, when};
pub use flex_layout::FlexLayout;
pub use node::{Children, LayoutNode};
