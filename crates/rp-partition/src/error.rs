use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("cannot partition into zero parts")]
    ZeroParts,

    #[error("cannot partition a total of zero")]
    ZeroTotal,

    /// Some part would have to be empty.
    #[error("cannot split {total} into {parts} non-empty parts")]
    Infeasible { total: u32, parts: u32 },
}

pub type PartitionResult<T> = Result<T, PartitionError>;
