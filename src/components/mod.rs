//! Shell UI components.
//!
//! DESIGN
//! ======
//! `layout` owns the theme resolver and the session load; the other
//! components are presentational and receive state through context or props.

pub mod layout;
pub mod nav;
pub mod theme_menu;
pub mod user_avatar;
