mod request;
mod response;

pub use request::{DEFAULT_COUNT, DEFAULT_MODEL, HashtagRequest, MAX_COUNT, ValidatedRequest};
pub use response::{ErrorResponse, HashtagResponse, Health};
