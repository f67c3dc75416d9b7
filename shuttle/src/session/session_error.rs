#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("not logged in, please log in first")]
    NotLoggedIn,
    #[error("failed reading session file '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing session file '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("session file '{filepath}' is malformed: {reason}")]
    MalformedSession { filepath: String, reason: String },
}
