//! `directory` shell: loads the users page once and prints the directory.
//!
//! `directory list` prints the visible records, optionally filtered by
//! `--query` and as JSON with `--json`. `directory show <id>` prints the
//! detail view for one user.
//! Structured logs go to stderr; set `RUST_LOG=directory=debug` to see each
//! fetched record.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use directory::config::DirectorySettings;
use directory::domain::{
    DirectoryService, DirectoryState, DisplayRecord, LoadStatus, Photo, UserDetail, UserId,
};
use directory::outbound::dummyjson::DummyJsonHttpSource;

/// `directory` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "directory",
    about = "Browse one page of users from a DummyJSON-compatible endpoint",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every user whose full name contains the query.
    List {
        /// Case-insensitive substring of the full name.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Print the visible records as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Print the detail view for one user.
    Show {
        /// User id as returned by the endpoint.
        id: u64,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let settings = DirectorySettings::from_environment()?;
    let source = DummyJsonHttpSource::new(settings.users_url()?, settings.request_timeout()?)
        .wrap_err("build HTTP client")?;
    let service = Arc::new(DirectoryService::new(
        Arc::new(source),
        settings.image_assigner(),
    ));

    let state = load(&service).await?;
    let mut out = io::stdout().lock();
    match args.command {
        Command::List { query, json } => {
            service.set_query(query);
            let snapshot = service.snapshot();
            let visible = snapshot.visible();
            if json {
                serde_json::to_writer_pretty(&mut out, &visible)?;
                writeln!(out)?;
            } else {
                for record in visible {
                    write_summary(&mut out, record)?;
                }
            }
        }
        Command::Show { id } => {
            let record = state
                .find(UserId::new(id))
                .ok_or_else(|| eyre!("no user with id {id} on this page"))?;
            write_detail(&mut out, &UserDetail::from_record(record))?;
        }
    }
    Ok(())
}

/// Start a refresh and wait for the published state to settle.
async fn load(service: &Arc<DirectoryService>) -> Result<DirectoryState> {
    let mut updates = service.subscribe();
    let task = service.refresh();
    let state = updates
        .wait_for(|current| current.status() == LoadStatus::Finished)
        .await
        .wrap_err("directory state closed")?
        .clone();
    task.await
        .wrap_err("users load task failed")?
        .wrap_err("could not load users")?;
    Ok(state)
}

fn write_summary(out: &mut impl Write, record: &DisplayRecord) -> io::Result<()> {
    writeln!(
        out,
        "{id}\t{name}\t{location}\t{image}",
        id = record.id(),
        name = record.full_name(),
        location = record.location_line(),
        image = record.image_url().unwrap_or("-"),
    )
}

fn write_detail(out: &mut impl Write, detail: &UserDetail) -> io::Result<()> {
    writeln!(out, "{}", detail.title())?;
    writeln!(out, "PHOTO")?;
    match detail.photo() {
        Photo::Remote(url) => writeln!(out, "  {url}")?,
        Photo::Placeholder => writeln!(out, "  (no photo)")?,
    }
    for section in detail.sections() {
        writeln!(out, "{}", section.header)?;
        for row in &section.rows {
            writeln!(out, "  {}: {}", row.label, row.value)?;
        }
    }
    Ok(())
}
