use serde::{Deserialize, Serialize};

/// A serializable error for client rendering and logging.
///
/// Carries only a message; the loader and parsers build it from whatever
/// failed underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    /// The error message (includes the chain from eyre's Debug output)
    pub message: String,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from(format!($($arg)*))
    };
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        Self {
            message: format!("{:?}", report),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self { message: s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_macro_formats_message() {
        let e = err!("unknown role: {}", "Janitor");
        assert_eq!(e.message, "unknown role: Janitor");
        assert_eq!(e.to_string(), "unknown role: Janitor");
    }

    #[test]
    fn eyre_report_keeps_context() {
        use eyre::WrapErr;

        let report = Err::<(), _>(eyre::eyre!("bad toml"))
            .wrap_err("failed to load dashboard config")
            .unwrap_err();
        let e = Error::from(report);
        assert!(e.message.contains("failed to load dashboard config"));
        assert!(e.message.contains("bad toml"));
    }
}
