// Domain layer - Immutable dashboard content
pub mod announcement;
pub mod dashboard;
pub mod embed;
pub mod error;
pub mod stat;
pub mod tabs;
