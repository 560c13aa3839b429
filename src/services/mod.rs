pub mod identity_service;
pub mod profile_service;
pub mod quiz_service;
