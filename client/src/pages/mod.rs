//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Backend flows live in plain async functions next to the
//! page so they can be driven without a browser.

pub mod add_counsellor;
pub mod counsellors;
pub mod dashboard;
pub mod forgot_password;
pub mod logout;
pub mod not_found;
pub mod reset_password;
pub mod sign_in;
pub mod users;
pub mod verify_otp;
