use ctest_collections::CollectionError;

#[derive(Debug, thiserror::Error)]
pub enum AssertError {
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Failed to write assertion output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssertError>;
