use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Board dimensions must be positive")]
    ZeroDimension,
    #[error("Too many mines for the board size")]
    TooManyMines,
    #[error("Mines have already been seeded")]
    AlreadySeeded,
    #[error("Mines have not been seeded yet")]
    NotSeeded,
}

pub type Result<T> = core::result::Result<T, BoardError>;
