// Aarya CLI — ask questions, inspect local knowledge scoring, chat.

mod commands;

use aarya::AaryaConfig;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aarya")]
#[command(about = "Aarya assistant — local knowledge first, Gemini fallback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/aarya/config.toml)
    #[arg(long, global = true, env = "AARYA_CONFIG")]
    config: Option<PathBuf>,

    /// Knowledge seed file, overrides `knowledge_path` from config
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    /// Print answers as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single utterance
    Ask {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Describe a JPEG image through the generative service
    Image { path: PathBuf },

    /// Interactive session, one utterance per line
    Chat,

    /// Show how local knowledge scores an utterance (no network)
    Explain {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Inspect the knowledge base
    Knowledge {
        #[command(subcommand)]
        action: KnowledgeAction,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand)]
enum KnowledgeAction {
    /// List entries in store order (by topic)
    List,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "aarya", &mut std::io::stdout());
        return;
    }

    let mut config = match AaryaConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if cli.knowledge.is_some() {
        config.knowledge_path = cli.knowledge.clone();
    }

    let result = match cli.command {
        Commands::Ask { text } => commands::ask(&config, &text.join(" "), cli.json).await,
        Commands::Image { path } => commands::image(&config, &path, cli.json).await,
        Commands::Chat => commands::chat(&config, cli.json).await,
        Commands::Explain { text } => commands::explain(&config, &text.join(" ")),
        Commands::Knowledge { action: KnowledgeAction::List } => commands::list_knowledge(&config, cli.json),
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
