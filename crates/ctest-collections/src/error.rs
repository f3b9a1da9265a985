use crate::value::ValueKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollectionError {
    #[error("Value of kind '{kind}' is not hashable")]
    NotHashable { kind: ValueKind },

    #[error("Cannot hash into a table with zero buckets")]
    EmptyTable,

    #[error("No remaining occurrence of {key} in counter")]
    MissingKey { key: String },
}

pub type Result<T> = std::result::Result<T, CollectionError>;
