use clap::Parser;
use prlabel_core::config::HostCredentials;
use prlabel_core::{ErrorKind, Present, ReviewState, Session, Settings, TabId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prlabel", version, about = "Cycle the review label on a pull request")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the current review state of a pull request
    Status(TargetArgs),
    /// Advance the review label one step in the cycle
    Advance(TargetArgs),
}

#[derive(clap::Args)]
struct TargetArgs {
    /// Pull request page URL (github.com or a configured enterprise host)
    url: String,

    /// YAML settings file; when given, credential flags are ignored
    #[arg(long, env = "PRLABEL_SETTINGS")]
    settings: Option<PathBuf>,

    /// github.com account name
    #[arg(long, env = "PRLABEL_GITHUB_USERNAME")]
    github_username: Option<String>,

    /// github.com password or token
    #[arg(long, env = "PRLABEL_GITHUB_PASSWORD", hide_env_values = true)]
    github_password: Option<String>,

    /// Enterprise API prefix, trailing slash included
    #[arg(long, env = "PRLABEL_GHE_API_PREFIX")]
    ghe_api_prefix: Option<String>,

    /// Enterprise account name
    #[arg(long, env = "PRLABEL_GHE_USERNAME")]
    ghe_username: Option<String>,

    /// Enterprise password or token
    #[arg(long, env = "PRLABEL_GHE_PASSWORD", hide_env_values = true)]
    ghe_password: Option<String>,
}

impl TargetArgs {
    fn settings(&self) -> Result<Settings, prlabel_core::Error> {
        if let Some(path) = &self.settings {
            return Settings::from_file(path);
        }

        fn clean(v: &Option<String>) -> Option<String> {
            v.as_deref().filter(|s| !s.is_empty()).map(String::from)
        }

        Ok(Settings {
            github: HostCredentials {
                username: clean(&self.github_username),
                password: clean(&self.github_password),
            },
            ghe: HostCredentials {
                username: clean(&self.ghe_username),
                password: clean(&self.ghe_password),
            },
            ghe_api_prefix: clean(&self.ghe_api_prefix),
        })
    }
}

/// Terminal stand-in for the browser chrome: one line per rendered state
struct TerminalPresenter;

impl Present for TerminalPresenter {
    fn set_indicator(&self, state: ReviewState) {
        println!("state: {}", state.as_str());
    }

    fn set_badge(&self, _tab: TabId, _state: ReviewState) {
        // No page to draw on from a terminal
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Status(args) => run(args, false),
        Commands::Advance(args) => run(args, true),
    };
    std::process::exit(code);
}

fn run(args: TargetArgs, advance: bool) -> i32 {
    let settings = match args.settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return 1;
        }
    };

    let session = Session::new(settings);
    let presenter = TerminalPresenter;

    let result = rt.block_on(async {
        if advance {
            session.click(0, &args.url, &presenter).await
        } else {
            session.client().fetch_current_label(&args.url).await.map(|state| {
                presenter.set_indicator(state);
                state
            })
        }
    });

    match result {
        Ok(_) => 0,
        Err(e) if e.kind() == ErrorKind::NotTrackable => {
            eprintln!("Error: {e}");
            2
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
