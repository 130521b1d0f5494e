//! Network access for the shell.
//!
//! Only the identity endpoints are used here: current-user lookup and the
//! profile theme-preference write.

pub mod api;
