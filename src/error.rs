use thiserror::Error;

/// Public error type for every formatter.  The first field names the
/// formatter that rejected the input.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("`{0}`: {1}")]
    Length(&'static str, String),

    #[error("`{0}`: {1}")]
    Format(&'static str, String),

    #[error("`{0}`: unable to convert: {1}")]
    Transport(&'static str, #[source] reqwest::Error),

    #[error("`{0}`: invalid translation endpoint: {1}")]
    Endpoint(&'static str, String),
}

/// Coarse classification of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty input, or the wrong number of digits after cleaning.
    Length,
    /// Input of acceptable length that still cannot be represented.
    Format,
    /// The remote translation call failed or its body could not be read.
    Transport,
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length(..) => ErrorKind::Length,
            Self::Format(..) | Self::Endpoint(..) => ErrorKind::Format,
            Self::Transport(..) => ErrorKind::Transport,
        }
    }

    /// Name of the formatter that produced this error.
    pub fn formatter(&self) -> &'static str {
        match self {
            Self::Length(name, _)
            | Self::Format(name, _)
            | Self::Transport(name, _)
            | Self::Endpoint(name, _) => *name,
        }
    }

    pub(crate) fn empty(formatter: &'static str) -> Self {
        Self::Length(formatter, "string not long enough to convert".into())
    }

    pub(crate) fn digit_count(formatter: &'static str, expected: usize, found: usize) -> Self {
        Self::Length(
            formatter,
            format!("expected {expected} digits, found {found}"),
        )
    }
}
