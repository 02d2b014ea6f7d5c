//! Plain-text building blocks shared by the views.

mod input;
mod navbar;
mod select;

pub use input::Input;
pub use navbar::Navbar;
pub use select::Select;
