/// Client management interface
pub mod clients;
/// Enrollment interface
pub mod enrollments;
/// Event log interface
pub mod events;
/// Server information interface
pub mod general;
/// Report interface
pub mod reports;
/// Settings and product key interface
pub mod settings;
/// Verification interface
pub mod verifications;
