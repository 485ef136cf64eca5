/// Client management implementation
pub mod client_service;
/// Enrollment implementation
pub mod enrollment_service;
/// Event log implementation
pub mod event_service;
/// Server information implementation
pub mod general_service;
/// Report implementation
pub mod report_service;
/// Settings and product key implementation
pub mod settings_service;
/// Verification implementation
pub mod verification_service;

pub use crate::application::interfaces::clients::*;
pub use crate::application::interfaces::enrollments::*;
pub use crate::application::interfaces::events::*;
pub use crate::application::interfaces::general::*;
pub use crate::application::interfaces::reports::*;
pub use crate::application::interfaces::settings::*;
pub use crate::application::interfaces::verifications::*;
