mod http;
mod terminal;

use std::process::ExitCode;

use clap::Parser;
use tree_evaluation::config::{
    ApiConfig, ApiTimeouts, DEFAULT_API_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use tree_evaluation::page::Begin;
use tree_evaluation::view::render_text;
use tree_evaluation::{EvaluationPage, EvaluationView, NavigationState, PageState};

use crate::http::HttpEvaluationApi;
use crate::terminal::{ExitNavigator, StderrNotifier};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid --handoff JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to encode evaluation as JSON: {0}")]
    Encode(serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tree-eval", about = "Request and display an AI evaluation of a decorated tree")]
struct Cli {
    /// Tree identifier from the `/tree/{uuid}` route.
    tree_id: String,

    /// Evaluation tone: `mild` or `spicy`. Anything else falls back to `mild`.
    #[arg(long)]
    mode: Option<String>,

    /// Image reference returned by the upload step.
    #[arg(long)]
    image_key: Option<String>,

    /// Local image shown when the server returns none.
    #[arg(long)]
    preview_url: Option<String>,

    /// Full hand-off state as JSON, e.g. `{"imageKey":"...","previewUrl":"..."}`.
    #[arg(long)]
    handoff: Option<String>,

    #[arg(long, env = "TREE_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "TREE_API_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "TREE_API_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    /// Print the evaluation as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn api_config(&self) -> ApiConfig {
        ApiConfig::with_base_url(Some(&self.base_url)).with_timeouts(ApiTimeouts {
            request_secs: self.request_timeout_secs,
            connect_secs: self.connect_timeout_secs,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let handoff = build_handoff(&cli)?;

    let api = HttpEvaluationApi::new(&cli.api_config())?;
    let notifier = StderrNotifier;
    let navigator = ExitNavigator::default();
    let mut page = EvaluationPage::new(api, &notifier, &navigator);

    let begin = page.begin(&cli.tree_id, cli.mode.as_deref(), handoff.as_ref());
    if let Begin::Dispatch(_) = begin {
        eprint!("{}", render_text(&PageState::Loading));
    }

    if let PageState::Success(view) = page.settle(begin).await {
        print!("{}", render_success(view, cli.json)?);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(target) = navigator.target() {
        println!("redirect: {target}");
    }
    Ok(ExitCode::FAILURE)
}

fn render_success(view: &EvaluationView, json: bool) -> Result<String, CliError> {
    if json {
        let mut out = serde_json::to_string_pretty(view).map_err(CliError::Encode)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_text(&PageState::Success(view.clone())))
}

/// Merge `--handoff` JSON with the individual flags; flags win.
fn build_handoff(cli: &Cli) -> Result<Option<NavigationState>, CliError> {
    let mut state = match cli.handoff.as_deref() {
        Some(raw) => Some(serde_json::from_str::<NavigationState>(raw)?),
        None => None,
    };
    if let Some(image_key) = &cli.image_key {
        state.get_or_insert_with(NavigationState::default).image_key = Some(image_key.clone());
    }
    if let Some(preview_url) = &cli.preview_url {
        state.get_or_insert_with(NavigationState::default).preview_url = Some(preview_url.clone());
    }
    Ok(state)
}
