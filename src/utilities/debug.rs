use std::io::{stdout, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver};
use crossterm::{cursor, terminal, ExecutableCommand, Result};

use crate::modules::elevator::Elevator;

use super::elevator_status::ElevatorStatus;
use super::floor::Floor;

const SEPARATOR: &str = "+------------------+------------------+------------------+--------+";

/// Redraws the button tables in place on every call.
pub struct Debug {
    stdout: Stdout,
    printed_lines: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            printed_lines: 0,
        }
    }

    pub fn printstatus(&mut self, status: &ElevatorStatus) -> Result<()> {
        if self.printed_lines > 0 {
            self.stdout.execute(cursor::MoveUp(self.printed_lines))?;
            self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        let lines = render(status);
        for line in &lines {
            writeln!(self.stdout, "{}", line)?;
        }
        self.stdout.flush()?;
        self.printed_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Ok(())
    }
}

impl Default for Debug {
    fn default() -> Self {
        Debug::new()
    }
}

/// Redraws the elevator status every `interval` until `stop_rx` disconnects.
pub fn main(elevator: Arc<Elevator>, interval: Duration, stop_rx: Receiver<()>) {
    let timer = tick(interval);
    let mut debug = Debug::new();

    loop {
        select! {
            recv(stop_rx) -> _ => return,
            recv(timer) -> _ => {
                if let Err(err) = debug.printstatus(&elevator.status()) {
                    tracing::warn!(error = %err, "failed to print status");
                }
            },
        }
    }
}

fn enabled(pressed: bool) -> &'static str {
    if pressed { "Enabled" } else { "Disabled" }
}

pub fn render(status: &ElevatorStatus) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::from(SEPARATOR));
    lines.push(format!("| {0:<16} | {1:<16} | {2:<16} | {3:<6} |", "FLOOR", "FLOOR BUTTON", "ELEVATOR BUTTON", "CAR"));
    for floor in Floor::ALL.iter().rev().copied() {
        lines.push(String::from(SEPARATOR));
        let car = if status.current_floor == floor { "[#]" } else { "" };
        lines.push(format!(
            "| {0:<16} | {1:<16} | {2:<16} | {3:<6} |",
            floor.as_str(),
            enabled(status.floor_button(floor)),
            enabled(status.elevator_button(floor)),
            car,
        ));
    }
    lines.push(String::from(SEPARATOR));

    let occupants: Vec<String> = status.occupants.iter().map(|agent| agent.to_string()).collect();
    let waiting: Vec<String> = status
        .waiting
        .iter()
        .map(|(agent, floor)| format!("{} @ {}", agent.name, floor))
        .collect();
    let calls: Vec<String> = status.calls.iter().map(|call| call.as_string()).collect();
    lines.push(format!("INSIDE:  {}", occupants.join(", ")));
    lines.push(format!("WAITING: {}", waiting.join(", ")));
    lines.push(format!("CALLS:   {}", calls.join(", ")));
    lines
}
