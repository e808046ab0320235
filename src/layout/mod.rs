//! Layout Module
//!
//! Flexbox layout of view subtrees using Taffy.
//!
//! # Architecture
//!
//! The layout module uses [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant flexbox computation. spark-flex adds no layout rules of its
//! own; the bridge only:
//!
//! 1. Converts spark-flex values ↔ Taffy styles
//! 2. Mirrors the host view hierarchy into the Taffy tree
//! 3. Measures leaves from their host content size
//! 4. Writes computed rects back into host frames
//!
//! # Example
//!
//! ```
//! use spark_flex::{LayoutMode, Rect, View};
//!
//! let root = View::new();
//! root.set_frame(Rect::new(0.0, 0.0, 320.0, 480.0));
//! root.flex().padding(12.0).layout(LayoutMode::AdjustHeight).unwrap();
//! assert_eq!(root.frame().height(), 24.0);
//! ```

pub(crate) mod convert;
mod taffy_bridge;

pub use taffy_bridge::{apply_layout, size_that_fits};
