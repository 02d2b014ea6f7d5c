pub mod auth;
pub mod tech;

pub use auth::AuthCommands;
pub use tech::TechCommands;
