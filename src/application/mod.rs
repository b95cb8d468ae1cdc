// Application layer - Use cases
pub mod dashboard_service;
