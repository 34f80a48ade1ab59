//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::dataset::{load_dataset, Dataset};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, MetricsRegistry};
use crate::orchestrator::{Phase, TurnOrchestrator};
use crate::session::{InMemorySessionStore, SessionKey};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_answer, write_line};

/// Parse arguments and dispatch.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            dataset,
            host,
            port,
        } => serve(&dataset, host, port),
        Command::Play { dataset } => play(&dataset),
        Command::Inspect { dataset } => inspect(&dataset),
    }
}

fn load(path: &Path) -> CliResult<Arc<Dataset>> {
    let dataset = load_dataset(path)?;
    Logger::info(
        "dataset_loaded",
        &[
            ("path", &path.display().to_string()),
            ("candidates", &dataset.candidate_count().to_string()),
            ("features", &dataset.feature_count().to_string()),
        ],
    );
    Ok(Arc::new(dataset))
}

/// Start the webhook server.
pub fn serve(path: &Path, host: String, port: u16) -> CliResult<()> {
    let dataset = load(path)?;
    let config = HttpServerConfig {
        host,
        port,
        cors_origins: Vec::new(),
    };
    let server = HttpServer::with_config(dataset, config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server_error(e.to_string()))
}

/// Play one interactive game on the terminal.
pub fn play(path: &Path) -> CliResult<()> {
    let dataset = load(path)?;
    let metrics = Arc::new(MetricsRegistry::new());
    let orchestrator = TurnOrchestrator::new(dataset, InMemorySessionStore::new(), metrics);
    let key = SessionKey::new(Uuid::new_v4().to_string());

    write_line("Think of an animal and I will guess it. Answer with yes/no/probably/idk.")?;

    let mut answer = "start".to_string();
    loop {
        let reply = orchestrator.handle_turn(&key, &answer)?;
        write_line(&reply.message)?;

        match reply.phase {
            Phase::Success | Phase::Exhausted => return Ok(()),
            Phase::AwaitingAnswer | Phase::AwaitingConfirmation => {}
        }

        answer = match read_answer()? {
            Some(line) => line,
            // EOF ends the game mid-session
            None => return Ok(()),
        };
    }
}

/// Print a dataset summary.
pub fn inspect(path: &Path) -> CliResult<()> {
    let dataset = load(path)?;

    write_line(&format!("candidates: {}", dataset.candidate_count()))?;
    write_line(&format!("features:   {}", dataset.feature_count()))?;
    write_line(&format!("schema:     {}", dataset.feature_names().join(", ")))?;
    for candidate in dataset.candidates() {
        let held: Vec<&str> = candidate
            .features
            .iter()
            .enumerate()
            .filter(|(_, &value)| value == 1)
            .map(|(column, _)| dataset.feature_name(column))
            .collect();
        write_line(&format!("  {}: {}", candidate.label, held.join(", ")))?;
    }
    Ok(())
}
