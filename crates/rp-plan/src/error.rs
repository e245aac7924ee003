use rp_partition::PartitionError;
use rp_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plan configuration error: {0}")]
    Config(String),

    #[error("no books to plan over")]
    NoBooks,

    #[error("the books hold {0} chapters, more than a single plan supports")]
    TooManyChapters(u64),

    #[error("partition error: {0}")]
    Partition(#[from] PartitionError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

pub type PlanResult<T> = Result<T, PlanError>;
