use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ksec::{commands, envfile, Result, SecretsClient, Settings};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ksec")]
#[command(version)]
#[command(about = "A tool for managing Kubernetes Secret data", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Operate in a specific namespace (default: current kubeconfig namespace)
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Kubeconfig context to use (default: current context)
    #[arg(long, global = true)]
    context: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Config file (default: $HOME/.ksec.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all secrets in a namespace
    #[command(visible_alias = "ls")]
    List {
        /// Show all secrets (default: Opaque only)
        #[arg(short, long)]
        all: bool,
    },

    /// Create secrets
    Create {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Delete secrets
    Delete {
        #[arg(required = true)]
        names: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get values from a secret
    Get {
        name: String,

        /// Print only this key's value
        key: Option<String>,

        /// Show who last updated each key and when
        #[arg(short, long)]
        verbose: bool,
    },

    /// Set values in a secret
    Set {
        name: String,

        /// KEY=VALUE pairs, one per argument (commas are part of the value)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Unset values in a secret
    Unset {
        name: String,

        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Push values from a .env file into a secret
    Push { file: PathBuf, name: String },

    /// Pull values from a secret into a .env file
    Pull { name: String, file: PathBuf },

    /// Generate a shell completion script
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KSEC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(cli.command, &cli.connection))
}

/// Load settings, layering flags over the config file, and connect
async fn connect(args: &ConnectionArgs) -> Result<SecretsClient> {
    let settings = Settings::load(args.config.as_deref())?.with_overrides(
        args.namespace.clone(),
        args.context.clone(),
        args.kubeconfig.clone(),
    );
    SecretsClient::connect(&settings).await
}

async fn dispatch(command: Commands, args: &ConnectionArgs) -> Result<()> {
    let mut out = io::stdout().lock();

    match command {
        Commands::List { all } => {
            let client = connect(args).await?;
            commands::list(&client, all, &mut out).await
        }
        Commands::Create { names } => {
            let client = connect(args).await?;
            commands::create(&client, &names, &mut out).await
        }
        Commands::Delete { names, yes } => {
            let client = connect(args).await?;
            commands::delete(&client, &names, yes, &mut io::stdin().lock(), &mut out).await
        }
        Commands::Get { name, key, verbose } => {
            let client = connect(args).await?;
            commands::get(&client, &name, key.as_deref(), verbose, &mut out).await
        }
        Commands::Set { name, items } => {
            let data = commands::parse_assignments(&items)?;
            let client = connect(args).await?;
            commands::set(&client, &name, data, &mut out).await
        }
        Commands::Unset { name, keys } => {
            let client = connect(args).await?;
            commands::unset(&client, &name, &keys, &mut out).await
        }
        Commands::Push { file, name } => {
            let data = envfile::read(&file)?;
            let client = connect(args).await?;
            commands::push(&client, &file, &name, data, &mut out).await
        }
        Commands::Pull { name, file } => {
            let client = connect(args).await?;
            commands::pull(&client, &name, &file, &mut out).await
        }
        Commands::Completion { shell } => {
            commands::completion(shell, &mut Cli::command(), &mut out)
        }
    }
}
