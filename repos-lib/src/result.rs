use crate::error::ReposError;

pub type ReposResult<T> = std::result::Result<T, ReposError>;
