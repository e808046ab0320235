//! Engine - view registry, host arrays and layout nodes.
//!
//! The engine manages the core data structures:
//! - Registry: Index allocation, ID mapping, recursive release
//! - Arrays: Parallel arrays standing in for host view state
//! - Assets: Named images
//! - FlexNode / FlexNodeRegistry: one layout node per flex-enabled view
//!
//! # Architecture
//!
//! Views are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: root    (parent=None, children=[1, 2], frame=0,0,375,812)
//! Index 1: header  (parent=0,    children=[],     background=purple)
//! Index 2: content (parent=0,    children=[3],    frame=0,100,375,712)
//! ```
//!
//! `View` and `Flex` handles are thin `Copy` wrappers over these indices.
//! All state is thread-local: views belong to the UI thread that made them.

mod assets;
mod flex_node;
mod flex_node_registry;
mod registry;
pub mod arrays;

pub use assets::*;
pub use flex_node::*;
pub use flex_node_registry::*;
pub use registry::*;
