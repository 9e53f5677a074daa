use clap::{Parser, Subcommand};
use modelsync_model::ApiSyncConfig;

#[derive(Parser, Debug)]
#[command(name = "modelsync")]
#[command(about = "Fetch, save and list users against a REST endpoint")]
pub struct Args {
    /// Users collection endpoint
    #[arg(
        long,
        env = "MODELSYNC_BASE_URL",
        default_value = "http://localhost:3000/users",
        global = true
    )]
    pub base_url: String,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch one user by id
    Fetch { id: String },

    /// Create a user, or update it when --id is given
    Save {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
    },

    /// List every user
    List,

    /// Register change/save listeners on a local user and trigger "change"
    Events,
}

impl Args {
    pub fn sync_config(&self) -> ApiSyncConfig {
        ApiSyncConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }
}
