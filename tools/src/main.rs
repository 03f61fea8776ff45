//! desk-runner: headless front end for the civic issue desk.
//!
//! Usage:
//!   desk-runner --viewer "John Manager" --status open --search pothole
//!   desk-runner --viewer "Mike Employee" --data-dir ./data
//!   desk-runner --viewer "Sarah Admin" --ipc-mode

use anyhow::Result;
use civic_desk_core::{
    command::DeskCommand,
    config::DeskConfig,
    engine::DeskEngine,
    filter::FilterQuery,
    snapshot::DeskSnapshot,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Filter { query: FilterQuery },
    Command { command: DeskCommand },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let viewer_name = arg_value(&args, "--viewer").unwrap_or("John Manager");

    let config = match arg_value(&args, "--data-dir") {
        Some(dir) => DeskConfig::load(dir)?,
        None => DeskConfig::builtin(),
    };
    let viewer = config.users.viewer_named(viewer_name)?;

    let query = FilterQuery::from_labels(
        arg_value(&args, "--search").unwrap_or_default(),
        arg_value(&args, "--status").unwrap_or("all"),
        arg_value(&args, "--priority").unwrap_or("all"),
        arg_value(&args, "--category").unwrap_or("all"),
    )?
    .for_viewer(&viewer);

    let mut engine = DeskEngine::new(config, viewer);

    if ipc_mode {
        run_ipc_loop(&mut engine, query)?;
    } else {
        print_summary(&engine.snapshot(&query));
    }
    Ok(())
}

fn run_ipc_loop(engine: &mut DeskEngine, mut query: FilterQuery) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::Filter { query: next } => query = next.for_viewer(&engine.viewer),
            IpcCommand::Command { command } => {
                let issue_id = command.issue_id().to_string();
                let events = engine.apply(command)?;
                log::debug!("applied command on {issue_id}: {} event(s)", events.len());
            }
        }
        writeln!(stdout, "{}", serde_json::to_string(&engine.snapshot(&query))?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(snapshot: &DeskSnapshot) {
    let counts = &snapshot.counts;

    println!("Civic Desk: desk-runner");
    println!("  viewer:        {} ({:?})", snapshot.viewer.name, snapshot.viewer.role);
    println!("  total:         {}", counts.total);
    println!("  open:          {}", counts.open);
    println!("  in progress:   {}", counts.in_progress);
    println!("  completed:     {}", counts.completed);
    println!("  high priority: {}", snapshot.high_priority);
    println!();

    println!("=== ISSUES ({} shown) ===", snapshot.visible.len());
    if let Some(empty) = snapshot.empty_state {
        println!("  No queries found. {}", empty.message());
    }
    for issue in &snapshot.visible {
        let assignee = if issue.assigned_to.is_empty() { "-" } else { issue.assigned_to.as_str() };
        println!(
            "  {} | {:<11} | {:<8} | {} | {}",
            issue.id, issue.status, issue.priority, issue.title, assignee
        );
    }

    if snapshot.assignment_menus.is_empty() {
        return;
    }
    println!();
    println!("=== ASSIGNMENT MENUS ===");
    for menu in &snapshot.assignment_menus {
        println!("  {}", menu.issue_id);
        if menu.candidates.is_empty() {
            println!("    (no recommendations available)");
        }
        for c in &menu.candidates {
            let flag = if c.is_at_capacity() { "  [full]" } else { "" };
            println!("    {:<40} {}/{}{flag}", c.name, c.current_count, c.capacity);
        }
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
