use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Manage the user directory from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API host (overrides API_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API port (overrides API_PORT)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// API base path (overrides API_BASE)
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every user
    List,
    /// Show a single user
    Show {
        /// User ID
        id: i64,
    },
    /// Register a new user
    Create {
        #[arg(long, short = 'n')]
        name: String,

        #[arg(long, short = 'e')]
        email: String,

        #[arg(long, short = 'p')]
        phone: String,
    },
    /// Change fields of an existing user; omitted fields keep their value
    Update {
        /// User ID
        id: i64,

        #[arg(long, short = 'n')]
        name: Option<String>,

        #[arg(long, short = 'e')]
        email: Option<String>,

        #[arg(long, short = 'p')]
        phone: Option<String>,
    },
    /// Delete a user after confirmation
    Delete {
        /// User ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
