use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fox", about = "Fox AI terminal chat client")]
pub struct Cli {
    /// Base URL of the Fox AI server.
    #[arg(
        long,
        global = true,
        env = "FOX_SERVER",
        default_value = "http://localhost:3000"
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information.
    Version,
    /// Show whether the server runs in mock or live mode.
    Status,
    /// Chat interactively; one message per line, `/quit` to leave.
    Chat {
        /// Mock personality: chatgpt, gemini, claude or grok.
        #[arg(long, default_value = "chatgpt")]
        model: String,
    },
}
