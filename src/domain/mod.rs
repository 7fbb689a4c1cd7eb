// Domain layer - Dashboard snapshot model and built-in fallback data
pub mod fallback;
pub mod snapshot;
