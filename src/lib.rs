//! # spark-flex
//!
//! Declarative flexbox view builder on top of [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! ## Architecture
//!
//! Views are indices into parallel arrays rather than objects. A `View` is
//! a `Copy` handle to one index; its `Flex` handle forwards layout
//! properties to one node in a thread-local Taffy tree.
//!
//! Building a screen is a single synchronous pass:
//! ```text
//! nested description → flatten → attach subviews → set direction → layout(mode) → frames
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Dimension, Rgba, geometry, flex enums)
//! - [`engine`] - View registry, host arrays, FlexNode registry
//! - [`view`] - View handles (hierarchy, frames, content)
//! - [`flex`] - Flex handles (property forwarding)
//! - [`layout`] - Taffy bridge
//! - [`primitives`] - LayoutNode, FlexLayout and control flow helpers
//!
//! ## Example
//!
//! ```
//! use spark_flex::{Direction, FlexLayout, LayoutMode, Rect, Rgba, View, nodes};
//!
//! let root = View::new();
//! let header = View::new();
//! let body = View::new();
//!
//! FlexLayout::with_background(Direction::Vertical, root, nodes![
//!     header.flex().height(44.0).background_color(Rgba::PURPLE),
//!     body.flex().grow(1.0),
//! ])
//! .unwrap();
//!
//! root.set_frame(Rect::new(0.0, 0.0, 375.0, 812.0));
//! root.flex().layout(LayoutMode::FitContainer).unwrap();
//!
//! assert_eq!(body.frame(), Rect::new(0.0, 44.0, 375.0, 768.0));
//! ```

pub mod engine;
pub mod error;
pub mod flex;
pub mod layout;
pub mod primitives;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    FlexNode, Image, LayoutConfig, configure, flex_node_count, get_allocated_count,
    image_named, layout_config, register_image, reset_registry,
};

pub use error::{FlexError, FlexResult};

pub use flex::Flex;

pub use primitives::{Children, FlexLayout, LayoutNode, each, either, when};

pub use view::View;
