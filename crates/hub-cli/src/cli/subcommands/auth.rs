use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account (does not log in).
    Register(AuthRegisterArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Must match --password.
    #[arg(long)]
    pub confirm_password: String,
    #[arg(long)]
    pub bio: String,
    /// How to reach you (phone, LinkedIn, ...).
    #[arg(long)]
    pub contact: String,
    /// Current course module.
    #[arg(long)]
    pub course_module: String,
}
