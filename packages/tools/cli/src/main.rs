//! DataGate CLI (`dg`)
//!
//! 대상 데이터베이스 등록, 스키마 조회, 역할 권한 작성을 수행하는
//! Operator 도구입니다.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "dg")]
#[command(author, version, about = "DataGate CLI - Operator tool for DataGate", long_about = None)]
struct Cli {
    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // ─────────────────────────────────────────────────────────────────────────
    // Database
    // ─────────────────────────────────────────────────────────────────────────
    /// Register a target database
    Register {
        /// Database host
        #[arg(long)]
        host: String,

        /// Database port (validated before dispatch)
        #[arg(long)]
        port: String,

        /// Database name
        #[arg(long)]
        db_name: String,

        /// Username
        #[arg(long)]
        username: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Database type (postgres | mysql | mongo)
        #[arg(long)]
        db_type: String,
    },

    /// Show the schema of the registered database
    Schema,

    // ─────────────────────────────────────────────────────────────────────────
    // Roles
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage roles
    Roles {
        #[command(subcommand)]
        action: RolesAction,
    },

    /// Manage CLI config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RolesAction {
    /// List existing roles
    List,

    /// Create a role from selected table/column permissions
    Create {
        /// Role name
        #[arg(long)]
        name: Option<String>,

        /// Grant spec `table:col1,col2` (`table:*` selects every column)
        #[arg(long)]
        grant: Vec<String>,

        /// Row filter `table=predicate`
        #[arg(long)]
        row_filter: Vec<String>,

        /// Declarative role file (YAML)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set config values
    Set {
        #[arg(long)]
        backend: Option<String>,
    },
    /// Show current config
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // 설정 로드
    let config = CliConfig::load()?;

    // 백엔드 결정 (CLI 옵션 > 설정 > 환경변수 > 기본값)
    let backend = cli.backend.clone().unwrap_or_else(|| config.backend_url());

    // 명령 실행
    match cli.command {
        Commands::Register {
            host,
            port,
            db_name,
            username,
            password,
            db_type,
        } => {
            commands::register::register(&backend, host, port, db_name, username, password, &db_type)
                .await
        }

        Commands::Schema => commands::schema::show(&backend).await,

        Commands::Roles { action } => match action {
            RolesAction::List => commands::roles::list(&backend).await,
            RolesAction::Create {
                name,
                grant,
                row_filter,
                file,
            } => commands::roles::create(&backend, name, grant, row_filter, file).await,
        },

        Commands::Config { action } => match action {
            ConfigAction::Set { backend } => commands::config::set(&config, backend),
            ConfigAction::Show => commands::config::show(&config),
        },
    }
}
