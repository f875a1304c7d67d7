//! Layout errors

use thiserror::Error;

/// Errors surfaced by the element tree layer
///
/// Lookup failures are hard errors at construction time; everything else in
/// the tree API degrades silently.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("container element `{id}` not found")]
    ContainerNotFound { id: String },
}
