//! Error type shared by the view host and the layout bridge.
//!
//! Nothing here is validated by spark-flex itself: these variants carry the
//! failures of the collaborators (taffy and the view host) up unchanged.

pub type FlexResult<T> = Result<T, FlexError>;

#[derive(thiserror::Error, Debug)]
pub enum FlexError {
    /// The handle refers to a view that was never allocated or was released.
    #[error("unknown view {0}")]
    UnknownView(usize),

    /// Attaching would make a view its own ancestor.
    #[error("cannot attach view {child} under view {parent}: would create a cycle")]
    Cycle { parent: usize, child: usize },

    #[error(transparent)]
    Layout(#[from] taffy::TaffyError),
}
