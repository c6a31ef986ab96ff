/// Error type for questionnaire sessions run by a front end.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// User cancelled the session (Ctrl+C, Esc, closed terminal, etc.)
    #[error("Session cancelled by user")]
    Cancelled,

    /// Front-end specific failure (I/O, terminal setup, etc.)
    #[error("Frontend error: {0}")]
    Frontend(#[from] anyhow::Error),
}

impl SessionError {
    /// Create a front-end error from any error type.
    pub fn frontend(err: impl Into<anyhow::Error>) -> Self {
        Self::Frontend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
