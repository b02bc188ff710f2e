pub mod error;
pub mod fallback;
pub(crate) mod http;
pub mod outcome;
pub mod primary;
