//! Page components mounted inside the shell.
//!
//! Feed, discovery, creation and messaging pages are owned by their own
//! features; the shell only ships a placeholder so every navigation target
//! resolves.

pub mod placeholder;
