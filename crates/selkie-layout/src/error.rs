#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("margin must be non-negative, got {0}")]
    InvalidMargin(f64),

    #[error("{0} layout is not implemented")]
    Unimplemented(&'static str),
}
