// JSON-lines bridge for a presentation layer.
// Each stdin line is one command object; each reply is one JSON line on stdout.
// Highlight timers are owned by the caller: it receives a ticket with
// `clear_after_ms` and sends `highlight_expired` back when the timer fires.
use grammar_core::command::{handle_line, Response};
use grammar_core::config::{init_tracing, TrainerConfig};
use grammar_core::GrammarEngine;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

fn main() -> io::Result<()> {
    let config = TrainerConfig::discover().unwrap_or_else(|e| {
        eprintln!("[grammar_trainer] {}; using defaults", e);
        TrainerConfig::default()
    });
    init_tracing(&config);
    info!("--- Grammar trainer bridge starting ---");

    let mut engine = GrammarEngine::from_config_or_detached(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        debug!("<- {}", input);

        let response = handle_line(&mut engine, input, config.highlight_clear_ms);
        if let Response::Err { error, .. } = &response {
            warn!("command failed: {}", error);
        }
        write_response(&mut stdout, &response)?;
    }

    info!("stdin closed, shutting down");
    match engine.save_ledger() {
        Ok(true) => {}
        Ok(false) => debug!("no ledger path configured, scores not saved"),
        Err(e) => error!("could not save score ledger: {}", e),
    }
    Ok(())
}

fn write_response(stdout: &mut io::Stdout, response: &Response) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    debug!("-> {}", json);
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}
