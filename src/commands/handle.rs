use fetcher::client::Fetcher;
use fetcher::error::Result;
use fetcher::handler;
use fetcher::processor::Passthrough;

/// Runs one invocation from `input_file` and writes the compact JSON result to stdout.
pub async fn run(input_file: Option<String>, user_agent: Option<String>) -> Result<()> {
    let path = input_file.unwrap_or_else(|| handler::DEFAULT_INPUT_FILE.to_string());
    let fetcher = Fetcher::new(user_agent, Passthrough);
    let result = handler::handle_file(&fetcher, &path).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
