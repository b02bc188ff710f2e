pub mod fetcher;
pub mod record;
pub mod resolver;
