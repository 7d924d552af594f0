use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;

/// Why a tag read or a persisted record could not be decoded.
///
/// These never escape as failures: a rejected tag becomes
/// [`Outcome::InvalidTag`](crate::commands::Outcome::InvalidTag) and a
/// rejected ledger record is dropped from the decoded list.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("expected exactly one record on the tag, found {0}")]
    RecordCount(usize),

    #[error("tag payload is not valid UTF-8")]
    NotUtf8,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing or mistyped field `{0}`")]
    MissingField(&'static str),

    #[error("userId is empty")]
    EmptyUserId,
}
