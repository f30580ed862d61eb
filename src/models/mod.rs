//! Data models for the HR console.
//!
//! Wire shapes use camelCase to match the browser front end and the document store.

mod action;
mod role;
mod screen;
mod session;
mod view;

pub use action::*;
pub use role::*;
pub use screen::*;
pub use session::*;
pub use view::*;
