use clap::Parser;
use job_board::{browse, cli, config, error, ingest, render};
use cli::{Cli, Commands};
use config::Config;
use error::{JobBoardError, Result};
use job_board_common::pipeline::view_indices;
use job_board_common::{filter_options, AppState};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` が無いときのログレベル
fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{}", render::render_error(&err.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let schema = cli.schema.unwrap_or(config.schema);

    match cli.command {
        Commands::List { file, view } => {
            let jobs = ingest::read_jobs(Some(file.as_path()), schema).await?;
            let sort = view.sort.unwrap_or_else(|| config.sort_mode());
            let indices = view_indices(&jobs, &view.selection(), sort);

            println!("📋 {}件中 {}件を表示 (並び替え: {})\n", jobs.len(), indices.len(), sort.label());
            print!("{}", render::render_list(&jobs, &indices));
        }

        Commands::Show { file, number, view } => {
            let jobs = ingest::read_jobs(Some(file.as_path()), schema).await?;
            let sort = view.sort.unwrap_or_else(|| config.sort_mode());
            let indices = view_indices(&jobs, &view.selection(), sort);

            let index = number
                .checked_sub(1)
                .and_then(|n| indices.get(n))
                .ok_or(JobBoardError::JobNotFound { index: number, count: indices.len() })?;
            print!("{}", render::render_detail(&jobs[*index]));
        }

        Commands::Options { file } => {
            let jobs = ingest::read_jobs(Some(file.as_path()), schema).await?;
            print!("{}", render::render_options(&filter_options(&jobs)));
        }

        Commands::Browse { file } => {
            println!("🔎 job-board - 対話モード\n");
            let mut state = AppState::new(schema, config.sort_mode());
            browse::run_browse(&mut state, file.as_deref()).await?;
        }

        Commands::Config { set_default_sort, set_schema, show } => {
            let mut config = config;

            if let Some(sort) = set_default_sort {
                config.set_default_sort(sort)?;
                println!("✔ 既定の並び替えを設定しました: {}", sort);
            }

            if let Some(schema) = set_schema {
                config.set_schema(schema)?;
                println!("✔ 既定のキー体系を設定しました: {}", schema);
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  並び替え: {}", config.sort_mode().label());
                println!("  キー体系: {}", config.schema);
            }
        }
    }

    Ok(())
}
