use threadview_types::CommentId;

#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read thread file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize thread: {0}")]
    Deserialization(serde_json::Error),
    #[error("duplicate comment id among siblings: {id}")]
    DuplicateId { id: CommentId },
    #[error("thread exceeds maximum nesting depth of {max}")]
    TooDeep { max: usize },
}

pub type ThreadResult<T> = std::result::Result<T, ThreadError>;
