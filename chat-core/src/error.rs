use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
