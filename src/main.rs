use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use listcraft::ListError;
use serde::Serialize;

mod cli;
use cli::{display, Cli, Commands, Op};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Array {
            capacity,
            json,
            ops,
        } => {
            let mut trace = Vec::new();
            let result = cli::replay_array(capacity, &ops, |op| trace.push(*op));
            if !json {
                print_trace("DynamicArray", &ops, &trace, step_failed(&result));
            }
            let array = result?;

            if json {
                print_json(&array)
            } else {
                let mut rendered = Vec::new();
                array.pretty_print(&mut rendered)?;
                print_boxed("Result", &rendered)
            }
        }
        Commands::List { json, ops } => {
            let mut trace = Vec::new();
            let result = cli::replay_list(&ops, |op| trace.push(*op));
            if !json {
                print_trace("SinglyLinkedList", &ops, &trace, step_failed(&result));
            }
            let list = result?;

            if json {
                print_json(&list)
            } else {
                let mut rendered = Vec::new();
                list.pretty_print(&mut rendered)?;
                print_boxed("Result", &rendered)
            }
        }
    }
}

/// True when the replay stopped because an operation was rejected, as
/// opposed to a bad script or capacity.
fn step_failed<T>(result: &Result<T>) -> bool {
    let rejected = result.as_ref().err().and_then(|e| e.downcast_ref::<ListError>());
    matches!(rejected, Some(ListError::IndexOutOfRange { .. }))
}

/// Show which operations ran, marking the one that failed.
fn print_trace(label: &str, ops: &[Op], ran: &[Op], failed: bool) {
    if ops.is_empty() {
        return;
    }

    display::section_top(label);
    for op in ran {
        display::row(&display::op_status(&op.to_string(), true));
    }
    if failed {
        if let Some(op) = ops.get(ran.len()) {
            display::row(&display::op_status(&op.to_string(), false));
        }
    }
    display::section_bot();
}

fn print_boxed(label: &str, rendered: &[u8]) -> Result<()> {
    let text = std::str::from_utf8(rendered).context("pretty-print produced invalid UTF-8")?;

    display::section_top(label);
    for line in text.lines() {
        display::row(line);
    }
    display::section_bot();
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, value).context("failed to serialize result")?;
    writeln!(out)?;
    Ok(())
}
