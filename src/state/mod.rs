//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `theme`) so individual components can
//! depend on small focused models provided through context.

pub mod auth;
pub mod theme;
