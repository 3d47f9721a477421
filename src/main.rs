mod commands;

use clap::{Parser, Subcommand};
use commands::{config_cmd::ConfigCmd, fetch::FetchArgs};
use fetcher::{config, logging, output};

#[derive(Parser)]
#[command(name = "fetcher", version, about = "Fetch JSON from a URL in a single GET")]
struct Cli {
    /// User-Agent header sent with each request
    #[arg(long, env = "FETCHER_USER_AGENT", global = true)]
    user_agent: Option<String>,

    /// Output format: table, json, yaml
    #[arg(short, long, env = "FETCHER_OUTPUT", global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a URL and print the processed JSON body
    Fetch {
        /// Target URL (falls back to the configured url)
        url: Option<String>,
        /// Execution params passed through as opaque text
        #[arg(long, conflicts_with = "params_file")]
        params: Option<String>,
        /// Read execution params from a file
        #[arg(long)]
        params_file: Option<String>,
        /// JSON pointer selecting part of the body, e.g. /data/0
        #[arg(long)]
        pointer: Option<String>,
    },
    /// Run one invocation from an event file
    Handle {
        /// Event file with tool_params and context
        input_file: Option<String>,
    },
    /// Manage local configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let cli = Cli::parse();
    let cfg = config::FetcherConfig::load();

    let user_agent = cli.user_agent.or(cfg.user_agent);
    let output_format = cli
        .output
        .or(cfg.output)
        .unwrap_or_else(|| "table".into());

    let result = match cli.command {
        Commands::Fetch {
            url,
            params,
            params_file,
            pointer,
        } => {
            let args = FetchArgs {
                url: url.or(cfg.url).unwrap_or_default(),
                params,
                params_file,
                pointer,
            };
            commands::fetch::run(args, user_agent, &output_format).await
        }
        Commands::Handle { input_file } => commands::handle::run(input_file, user_agent).await,
        Commands::Config { cmd } => commands::config_cmd::run(cmd, &output_format),
        Commands::Version => {
            println!("fetcher {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
