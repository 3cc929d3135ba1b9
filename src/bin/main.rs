//! rowtype CLI - Generate PHPStan/Psalm row types from a database schema
//!
//! Usage:
//!   rowtype generate [--connection <name>] [--namespace <ns>] [--class <name>] [--output <file>]
//!   rowtype connections
//!
//! Examples:
//!   rowtype generate --connection default --output src/Database/DatabaseTypes.php
//!   rowtype generate --object --partial --exclude '_log$'
//!   ROWTYPE_DB_DRIVER=postgres ROWTYPE_DB_HOST=localhost rowtype generate --schema public

use clap::{Args, Parser, Subcommand};
use rowtype::config::{Driver, RequestOverrides, Settings, SettingsError};
use rowtype::generate::{GenerateError, GenerationRequest, Generator};
use rowtype::metadata::{
    ConnectionError, MetadataConnection, MySqlConnection, PostgresConnection,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rowtype")]
#[command(about = "rowtype - PHPStan/Psalm row types from MySQL and PostgreSQL schemas")]
#[command(version)]
struct Cli {
    /// Path to a rowtype.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PHP types file
    Generate(GenerateArgs),

    /// List configured connections
    Connections,
}

#[derive(Args)]
struct GenerateArgs {
    /// Named connection from the config file
    #[arg(long)]
    connection: Option<String>,

    /// Namespace of the generated file
    #[arg(long)]
    namespace: Option<String>,

    /// Name of the placeholder class
    #[arg(long = "class")]
    class_name: Option<String>,

    /// Database to read (defaults to the connection's current database)
    #[arg(long)]
    database: Option<String>,

    /// Schema to read, PostgreSQL only (defaults to the current schema)
    #[arg(long)]
    schema: Option<String>,

    /// Render object{} shapes instead of array{}
    #[arg(long)]
    object: bool,

    /// Render the _Partial variant
    #[arg(long)]
    partial: bool,

    /// Keep plural table names
    #[arg(long)]
    no_singularize: bool,

    /// Only tables matching one of these regexes
    #[arg(long)]
    include: Vec<String>,

    /// Skip tables matching any of these regexes
    #[arg(long)]
    exclude: Vec<String>,

    /// Print only the type definitions, without the PHP wrapper
    #[arg(long)]
    definitions_only: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> RequestOverrides {
        RequestOverrides {
            namespace: self.namespace.clone(),
            class_name: self.class_name.clone(),
            database: self.database.clone(),
            schema: self.schema.clone(),
            object: self.object,
            partial: self.partial,
            no_singularize: self.no_singularize,
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Connection failed: {0}")]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Error writing '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Generate(args) => match cmd_generate(&settings, args).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Generation error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Connections => cmd_connections(&settings),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

async fn cmd_generate(settings: &Settings, args: GenerateArgs) -> Result<(), CliError> {
    let connection = settings.resolve_connection(args.connection.as_deref())?;
    let request = settings.build_request(&connection, &args.overrides())?;
    info!(connection = %connection.name, driver = connection.driver.as_str(), "generating types");

    let content = match connection.driver {
        Driver::MySql => {
            let conn = MySqlConnection::connect(&connection.url)?;
            let result = run(&conn, connection.driver, &request, args.definitions_only).await;
            keep_primary_error(result, conn.disconnect().await)?
        }
        Driver::Postgres => {
            let conn = PostgresConnection::connect(&connection.url).await?;
            run(&conn, connection.driver, &request, args.definitions_only).await?
        }
    };

    match args.output.or_else(|| settings.output.path.clone()) {
        Some(path) => {
            fs::write(&path, content).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "types written");
        }
        None => print!("{}", content),
    }

    Ok(())
}

async fn run<C: MetadataConnection>(
    connection: C,
    driver: Driver,
    request: &GenerationRequest,
    definitions_only: bool,
) -> Result<String, GenerateError> {
    let generator = Generator::new(connection, driver.dialect());
    if definitions_only {
        generator.generate_definitions(request).await
    } else {
        generator.generate(request).await
    }
}

/// Return the generation result; a failed shutdown is only logged.
fn keep_primary_error<T>(
    result: Result<T, GenerateError>,
    closed: Result<(), ConnectionError>,
) -> Result<T, GenerateError> {
    if let Err(e) = closed {
        warn!(error = %e, "failed to close connection pool");
    }
    result
}

fn cmd_connections(settings: &Settings) -> ExitCode {
    if settings.connections.is_empty() {
        println!("No connections configured.");
        return ExitCode::SUCCESS;
    }

    let default_name = settings.default_connection().map(|(name, _)| name);

    println!("Connections:");
    for (name, conn) in &settings.connections {
        let marker = if Some(name.as_str()) == default_name { " (default)" } else { "" };
        match &conn.default_schema {
            Some(schema) => println!("  - {} [{}, schema: {}]{}", name, conn.driver, schema, marker),
            None => println!("  - {} [{}]{}", name, conn.driver, marker),
        }
    }

    ExitCode::SUCCESS
}
