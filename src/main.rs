use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use corpus_portal::menu::FsLister;
use corpus_portal::render::{Content, EmbeddedPage};
use corpus_portal::{MenuBuilder, PortalConfig, Request, RequestScope, Table};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "corpus-portal")]
#[command(about = "Corpus portal request core", long_about = None)]
struct Cli {
    /// TOML config file (applications root, model catalog).
    #[arg(long, env = "CORPUS_PORTAL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a request fixture and write the rendered response.
    Render {
        /// Request fixture (JSON).
        #[arg(long)]
        request: PathBuf,

        /// Handler results to render: params, content, table (JSON).
        #[arg(long)]
        handler: Option<PathBuf>,

        /// Write the body here instead of printing headers and body to stdout.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

/// What a request handler would have placed in the scope buffers.
#[derive(Debug, Default, Deserialize)]
struct HandlerOutput {
    #[serde(default)]
    params: Content,

    #[serde(default)]
    content: Content,

    #[serde(default)]
    table: Table,
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "corpus_portal=info",
        1 => "corpus_portal=debug",
        _ => "corpus_portal=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = PortalConfig::load(cli.config.as_deref())?;

    match cli.cmd {
        Commands::Render {
            request,
            handler,
            out,
        } => {
            let req: Request = read_json(&request)?;
            let handler: HandlerOutput = match &handler {
                Some(path) => read_json(path)?,
                None => HandlerOutput::default(),
            };

            // 1) Resolve address, format and menus.
            let menus = MenuBuilder::new(&FsLister, &config.catalog, &config.applications_parent);
            let mut scope = RequestScope::open(&req, &menus)?;

            // 2) Fill the buffers the way a handler would.
            scope.params.extend(handler.params);
            scope.content.extend(handler.content);
            scope.table = handler.table;

            // 3) Render.
            let response = scope.render()?.into_http(&EmbeddedPage)?;
            tracing::info!(
                url = %scope.address().url,
                content_type = ?response.headers().get(http::header::CONTENT_TYPE),
                bytes = response.body().len(),
                "rendered response"
            );

            match out {
                Some(path) => {
                    std::fs::write(&path, response.body())
                        .with_context(|| format!("write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    for (name, value) in response.headers() {
                        writeln!(stdout, "{}: {}", name, value.to_str().unwrap_or_default())?;
                    }
                    writeln!(stdout)?;
                    stdout.write_all(response.body())?;
                }
            }
        }
    }

    Ok(())
}
