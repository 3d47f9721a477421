use fetcher::client::Fetcher;
use fetcher::error::{FetcherError, Result};
use fetcher::output;
use fetcher::params::ExecutionParams;
use fetcher::processor::{Passthrough, Pointer};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct FetchArgs {
    pub url: String,
    pub params: Option<String>,
    pub params_file: Option<String>,
    pub pointer: Option<String>,
}

fn read_params(
    params: Option<String>,
    params_file: Option<String>,
) -> Result<Option<ExecutionParams>> {
    match (params, params_file) {
        (Some(raw), _) => Ok(Some(ExecutionParams::from_raw(raw))),
        (_, Some(path)) => {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| FetcherError::Input(format!("Cannot read file {path}: {e}")))?;
            Ok(Some(ExecutionParams::from_raw(content)))
        }
        _ => Ok(None),
    }
}

pub async fn run(
    args: FetchArgs,
    user_agent: Option<String>,
    output_format: &str,
) -> Result<()> {
    let params = read_params(args.params, args.params_file)?;
    let fetcher = match args.pointer {
        Some(ptr) => Fetcher::new(user_agent, Pointer::new(ptr)?),
        None => Fetcher::new(user_agent, Passthrough),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} Fetching {msg}...")
            .map_err(|e| FetcherError::Config(e.to_string()))?,
    );
    spinner.set_message(args.url.clone());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = fetcher.fetch_data(params, &args.url).await;
    spinner.finish_and_clear();

    let outcome = result?;
    output::render(&outcome.into_value(), output_format);
    Ok(())
}
