use thiserror::Error;

use crate::layout::SeatId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("pool is empty - nothing to draw")]
    EmptyPool,

    #[error("unknown seat: {0}")]
    UnknownSeat(SeatId),

    #[error("invalid seat id: {0:?}")]
    InvalidSeatId(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("delimited file error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
