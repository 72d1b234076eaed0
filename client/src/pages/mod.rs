//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render route content only. Access control lives in `PrivateRoute`,
//! which wraps each page in `app.rs`.

pub mod game;
pub mod login;
