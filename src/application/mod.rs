// Application layer - Use cases over the snapshot repository
pub mod chart_service;
pub mod dashboard_service;
pub mod snapshot_repository;
