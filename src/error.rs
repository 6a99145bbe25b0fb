use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CountError {
    #[error("at least one worker is required")]
    NoWorkers,

    #[error("{workers} workers requested, at most {max} are supported")]
    TooManyWorkers { workers: usize, max: usize },

    #[error("worker {worker} panicked before finishing its range")]
    WorkerPanicked { worker: usize },

    #[error("partial counts were lost because the channel closed early")]
    ChannelClosed,
}
