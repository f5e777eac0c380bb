use thiserror::Error;

/// Convenient result alias for the airnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an operation referenced a city code absent from the network.
    #[error("unknown city code: {code}")]
    UnknownCity { code: String },

    /// Raised when an add or rename collided with an existing city code.
    #[error("city code already exists: {code}")]
    DuplicateKey { code: String },

    /// Raised when an ingested city record lacks a required field.
    #[error("city record is missing required field '{field}'")]
    InvalidRecord { field: &'static str },

    /// Raised when an ingested route entry lacks its port pair or distance.
    #[error("route entry is missing its '{field}' field")]
    MalformedRoute { field: &'static str },

    /// Raised when a route distance is negative or non-integral.
    #[error("invalid route distance: {value}")]
    InvalidDistance { value: String },

    /// Raised when a network document lacks a required top-level key.
    #[error("network document is missing the \"{key}\" key")]
    MalformedDocument { key: &'static str },

    /// Raised when an itinerary query was called with unusable arguments.
    #[error("invalid itinerary argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when consecutive itinerary cities lack a direct flight.
    #[error("no direct connection from {origin} to {destination}")]
    NoSuchConnection { origin: String, destination: String },

    /// Wrapper for JSON parse and render errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
