mod error;
mod fetch_request;
mod filter;
mod logging_middleware;
mod object_model;
mod page_cursor;
mod repos_client;
mod result;

pub use self::error::ReposError;
pub use self::fetch_request::{FetchRequest, IdentityKind};
pub use self::filter::RepoFilter;
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::Repository;
pub use self::page_cursor::{PageCursor, PER_PAGE};
pub use self::repos_client::{ClientOptions, ReposClient, DEFAULT_USER_AGENT};
pub use self::result::ReposResult;
