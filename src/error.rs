use thiserror::Error;

/// Convenience result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Error type returned by fallible collection operations.
///
/// Failures raised inside user-supplied callbacks are never caught here; they
/// propagate (panic) unchanged to the caller.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// `reduce` was called without an initial value on an empty collection.
    #[error("cannot reduce an empty collection without an initial value")]
    EmptyReduce,

    /// `avg` was called on an empty collection.
    #[error("cannot average an empty collection")]
    DivisionByZero,

    /// `sum`/`avg` encountered a value that does not support numeric addition.
    #[error("sum requires numeric values, found {found}")]
    NonNumeric {
        /// Type name of the offending value.
        found: &'static str,
    },

    /// `slice` was called with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// The input was not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON was valid but does not map onto a flat collection.
    #[error("unsupported json shape: {message}")]
    UnsupportedJson {
        /// What was encountered and where.
        message: String,
    },
}
