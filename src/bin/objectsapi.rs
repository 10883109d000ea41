//! Objects API CLI binary.
//!
//! Runs the CRUD walkthrough against the objects API, or a single operation
//! when a subcommand is given.

use std::process::ExitCode;

use clap::Parser;
use objectsapi::cli::{build_request, Cli, Command};
use objectsapi::{
    format_timestamp, Create, Delete, Get, List, ObjectListQuery, ObjectRecord, ObjectsClient,
    PrettyPrint, Update, Walkthrough,
};
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let client = match ObjectsClient::new(&cli.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check --base-url or the OBJECTS_API_URL environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the walkthrough dump.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(client: &ObjectsClient, cli: Cli) -> objectsapi::Result<()> {
    match cli.command.unwrap_or(Command::Walkthrough) {
        Command::Walkthrough => {
            // Step failures are printed and do not change the exit status.
            let outcome = Walkthrough::new(client, std::io::stdout()).run().await?;
            tracing::info!(?outcome, "walkthrough finished");
        }
        Command::List { ids } => {
            let objects = ObjectRecord::list(client, &ObjectListQuery { ids }).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&objects)?);
            } else {
                let rows: Vec<ObjectRow> = objects.iter().map(ObjectRow::from).collect();
                println!("{}", Table::new(rows));
                println!("\n{} objects", objects.len());
            }
        }
        Command::Get { id } => {
            let object = ObjectRecord::get(client, id).await?;
            output_single(&object, cli.json)?;
        }
        Command::Create { name, attrs } => {
            let request = build_request(name, attrs);
            let object = ObjectRecord::create(client, &request).await?;
            output_single(&object, cli.json)?;
        }
        Command::Update { id, name, attrs } => {
            let request = build_request(name, attrs);
            let object = ObjectRecord::update(client, id, &request).await?;
            output_single(&object, cli.json)?;
        }
        Command::Delete { id } => {
            let body = ObjectRecord::delete(client, id).await?;
            println!("{body}");
        }
    }
    Ok(())
}

fn output_single(object: &ObjectRecord, json: bool) -> objectsapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(object)?);
        return Ok(());
    }

    println!("{}", object.pretty_print());
    if object.created_at.is_some() {
        println!("CreatedAt: {}", format_timestamp(object.created_at.as_ref()));
    }
    if object.updated_at.is_some() {
        println!("UpdatedAt: {}", format_timestamp(object.updated_at.as_ref()));
    }
    Ok(())
}

// Table row type for non-JSON list output

#[derive(Tabled)]
struct ObjectRow {
    id: String,
    name: String,
    attributes: usize,
}

impl From<&ObjectRecord> for ObjectRow {
    fn from(o: &ObjectRecord) -> Self {
        Self {
            id: o.id.clone(),
            name: o.name.clone(),
            attributes: o.attribute_count(),
        }
    }
}
