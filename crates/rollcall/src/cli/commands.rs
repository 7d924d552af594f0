//! # CLI Layer
//!
//! This module is **one possible UI client** for rollcall. It is the only place
//! that knows about terminal I/O, argument parsing and log output.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: load config, open the ledger, build the API
//! 3. **API Dispatch**: call the matching `RollcallApi` method
//! 4. **Presentation**: print outcomes and apply requested effects
//! 5. **Collaborators**: tag input from args/stdin, report delivery to an outbox

use super::adapters::{CliTagReader, OutboxDelivery, StdoutDelivery};
use super::render::{print_messages, print_sessions, print_status, report_message, scan_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use rollcallapp::api::RollcallApi;
use rollcallapp::commands::ReportStatus;
use rollcallapp::config::{default_config_dir, RollcallConfig};
use rollcallapp::error::{Result, RollcallError};
use rollcallapp::model::ScanAction;
use rollcallapp::report::ReportZone;
use rollcallapp::store::fs_backend::FsBackend;
use rollcallapp::store::LedgerStore;
use rollcallapp::tag::TagReader;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct AppContext {
    api: RollcallApi<FsBackend>,
    config: RollcallConfig,
    config_dir: Option<PathBuf>,
    data_dir: PathBuf,
}

impl AppContext {
    fn zone(&self) -> ReportZone {
        self.api.report_options().zone
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::CheckIn { tags }) => handle_scan(&mut ctx, tags, ScanAction::CheckIn),
        Some(Commands::CheckOut { tags }) => handle_scan(&mut ctx, tags, ScanAction::CheckOut),
        Some(Commands::Scan { action, tags }) => handle_named_scan(&mut ctx, tags, &action),
        Some(Commands::Status) | None => handle_status(&ctx),
        Some(Commands::Pending) => handle_pending(&ctx),
        Some(Commands::Report {
            dry_run,
            stdout,
            outbox,
        }) => handle_report(&mut ctx, dry_run, stdout, outbox),
        Some(Commands::Config) => handle_config(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rollcallapp=debug,rollcall=debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = std::env::var_os("ROLLCALL_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(default_config_dir);
    let mut config = RollcallConfig::load(config_dir.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    let data_dir = config.data_dir()?;
    let store = LedgerStore::with_backend(FsBackend::new(data_dir.clone()));
    let api = RollcallApi::new(store, config.report_options());

    Ok(AppContext {
        api,
        config,
        config_dir,
        data_dir,
    })
}

fn handle_scan(ctx: &mut AppContext, tags: Vec<String>, action: ScanAction) -> Result<()> {
    let mut reader = CliTagReader::new(tags);
    let result = ctx.api.scan_from(&mut reader, action)?;
    print_messages(&scan_messages(&result, &ctx.zone()));
    Ok(())
}

fn handle_named_scan(ctx: &mut AppContext, tags: Vec<String>, action: &str) -> Result<()> {
    let mut reader = CliTagReader::new(tags);
    let read = reader.await_scan()?;
    let result = ctx.api.process_named(read.as_ref(), action)?;
    print_messages(&scan_messages(&result, &ctx.zone()));
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let status = ctx.api.status()?;
    print_status(&status, &ctx.zone());
    Ok(())
}

fn handle_pending(ctx: &AppContext) -> Result<()> {
    let sessions = ctx.api.pending_sessions()?;
    print_sessions(&sessions, &ctx.zone());
    Ok(())
}

fn handle_report(
    ctx: &mut AppContext,
    dry_run: bool,
    stdout: bool,
    outbox: Option<PathBuf>,
) -> Result<()> {
    if dry_run {
        match ctx.api.preview_report()? {
            Some(doc) => {
                println!("Subject: {}", doc.subject);
                println!();
                print!("{}", doc.body);
            }
            None => print_messages(&[report_message(&ReportStatus::NothingToSend)]),
        }
        return Ok(());
    }

    let recipient = ctx.config.recipient.clone();
    let status = if stdout {
        ctx.api.send_report(&mut StdoutDelivery { recipient })?
    } else {
        let dir = outbox.unwrap_or_else(|| ctx.data_dir.join("outbox"));
        let mut delivery = OutboxDelivery::new(dir, recipient);
        let status = ctx.api.send_report(&mut delivery)?;
        if let Some(path) = delivery.written() {
            println!("{}", path.display());
        }
        status
    };

    if status == ReportStatus::DeliveryFailed {
        return Err(RollcallError::Api(report_message(&status).content));
    }
    // The mail itself is the output when printing to stdout
    if !(stdout && matches!(status, ReportStatus::Sent { .. })) {
        print_messages(&[report_message(&status)]);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let config_dir = ctx
        .config_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    println!("config-dir = {}", config_dir);
    println!("data-dir = {}", ctx.data_dir.display());
    println!("report-title = {}", ctx.config.report_title);
    println!("locale = {}", ctx.config.locale);
    println!(
        "recipient = {}",
        ctx.config.recipient.as_deref().unwrap_or("(none)")
    );
    Ok(())
}
