use thiserror::Error;

/// Unified error type for the ritmo workspace.
///
/// Per-symbol operations never abort a whole run: the pipeline records one of
/// these per failing symbol and keeps going. The only run-level failure is
/// [`RitmoError::NoData`], raised when no requested symbol yields any usable
/// history.
#[derive(Debug, Error)]
pub enum RitmoError {
    /// The provider could not be reached or returned a malformed payload.
    #[error("fetch failed for {symbol}: {msg}")]
    Fetch {
        /// Symbol whose fetch failed.
        symbol: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// The series does not meet a transform's preconditions (too short,
    /// non-positive values, emptied by cleaning).
    #[error("data quality: {0}")]
    DataQuality(String),

    /// A statistic could not be computed and no defined sentinel applies.
    #[error("computation failed: {0}")]
    Computation(String),

    /// Invalid input argument (window, period, date range).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// No requested symbol returned any usable data.
    #[error("no symbol returned any data")]
    NoData,
}

impl RitmoError {
    /// Helper: build a `Fetch` error tagged with the failing symbol.
    pub fn fetch(symbol: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            symbol: symbol.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `DataQuality` error.
    pub fn data_quality(msg: impl Into<String>) -> Self {
        Self::DataQuality(msg.into())
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
