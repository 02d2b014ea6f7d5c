use clap::{Args, Subcommand};

/// Technology list commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TechCommands {
    /// List your technologies.
    List,
    /// Add a technology.
    Add(TechAddArgs),
    /// Change a technology's status.
    Edit(TechEditArgs),
    /// Remove a technology.
    Remove(TechRemoveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TechAddArgs {
    #[arg(long)]
    pub title: String,
    /// Iniciante | Intermediário | Avançado (or beginner | intermediate | advanced)
    #[arg(long)]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct TechEditArgs {
    /// Technology id.
    pub id: String,
    /// Iniciante | Intermediário | Avançado (or beginner | intermediate | advanced)
    #[arg(long)]
    pub status: String,
}

#[derive(Clone, Debug, Args)]
pub struct TechRemoveArgs {
    /// Technology id.
    pub id: String,
}
