use clap::Subcommand;
use fetcher::config::FetcherConfig;
use fetcher::error::Result;
use fetcher::output;

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Get current configuration
    Get,
    /// Set a configuration value
    Set {
        /// Key to set (url, user_agent, output)
        key: String,
        /// Value
        value: String,
    },
}

pub fn run(cmd: ConfigCmd, output_format: &str) -> Result<()> {
    match cmd {
        ConfigCmd::Get => {
            let config = FetcherConfig::load();
            if output_format == "json" || output_format == "yaml" {
                let value = serde_json::to_value(&config)?;
                output::render(&value, output_format);
            } else {
                println!("url:        {}", config.url.as_deref().unwrap_or("(not set)"));
                println!(
                    "user_agent: {}",
                    config.user_agent.as_deref().unwrap_or("(default)")
                );
                println!("output:     {}", config.output.as_deref().unwrap_or("table"));
            }
        }
        ConfigCmd::Set { key, value } => {
            let mut config = FetcherConfig::load();
            config.set(&key, value)?;
            config.save()?;
            output::print_success(&format!("Set '{key}' in ~/.fetcher/config.toml"));
        }
    }
    Ok(())
}
