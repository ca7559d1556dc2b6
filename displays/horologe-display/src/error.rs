//! Driver errors
//!
//! Bus failures are passed through untouched in the `E` parameter. The
//! remaining variants are caller mistakes and are reported before any
//! byte reaches the bus.

use crate::config::ConfigError;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus write failed before any whole page was written. During a
    /// refresh, page 0 may already be partly written.
    Transport(E),
    /// Bus write failed mid-refresh after `pages_written` whole pages
    /// were sent. Display RAM holds a mix of old and new frames until
    /// the next successful refresh.
    PartialFrame {
        /// Pages fully written before the failure
        pages_written: u8,
        /// Underlying bus error
        source: E,
    },
    /// Buffer size does not match the panel
    DimensionMismatch {
        /// Panel (width, height)
        expected: (u16, u16),
        /// Buffer (width, height)
        actual: (u16, u16),
    },
    /// Command longer than one bus block
    PayloadTooLarge {
        /// Offending length
        len: usize,
    },
    /// Configuration rejected
    Config(ConfigError),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl<E> Error<E> {
    /// The bus error behind this failure, if any
    pub fn transport(&self) -> Option<&E> {
        match self {
            Error::Transport(e) | Error::PartialFrame { source: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Whether this is a caller mistake rather than a bus fault
    pub fn is_contract_violation(&self) -> bool {
        self.transport().is_none()
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "bus write failed: {e:?}"),
            Error::PartialFrame {
                pages_written,
                source,
            } => write!(
                f,
                "bus write failed after {pages_written} pages: {source:?}"
            ),
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "buffer is {}x{}, display is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Error::PayloadTooLarge { len } => {
                write!(f, "{len} byte command exceeds one bus block")
            }
            Error::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}
