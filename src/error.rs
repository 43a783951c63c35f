use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("component index {index} out of range (vector has {dims} components)")]
    ComponentOutOfRange { index: usize, dims: usize },

    #[error("malformed vector literal: {0:?}")]
    ParseVector(String),
}
