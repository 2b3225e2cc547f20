//! Interactive operator console.
//!
//! A line-oriented menu over any `BufRead`/`Write` pair. All state changes go
//! through the shared `ControlEngine`; the console keeps no station state of
//! its own.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use station_core::{ControlEngine, PumpCommand, ValveCommand, parse_thresholds};

/// Why the console loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleExit {
    Quit,
    EndOfInput,
}

pub struct Console<R, W> {
    engine: Arc<ControlEngine>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(engine: Arc<ControlEngine>, input: R, out: W) -> Self {
        Self { engine, input, out }
    }

    /// Show the menu and dispatch choices until quit or end of input.
    pub fn run(&mut self) -> io::Result<ConsoleExit> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(ConsoleExit::EndOfInput);
            };
            let handled = match choice.as_str() {
                "1" => self.toggle_manual_mode().map(Some),
                "2" => self.toggle_monitoring().map(Some),
                "3" => self.update_thresholds(),
                "4" => self.control_actuators(),
                "5" => self.show_status().map(Some),
                "0" | "q" | "quit" => return Ok(ConsoleExit::Quit),
                _ => writeln!(self.out, "Invalid option. Please try again.").map(Some),
            }?;
            if handled.is_none() {
                return Ok(ConsoleExit::EndOfInput);
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let s = self.engine.snapshot();
        writeln!(self.out, "\n=== Control Menu ===")?;
        writeln!(
            self.out,
            "1. Toggle Manual Mode (current: {})",
            if s.manual_mode { "Manual" } else { "Automatic" }
        )?;
        writeln!(
            self.out,
            "2. Toggle Monitoring (current: {})",
            if s.monitoring_active { "Active" } else { "Paused" }
        )?;
        writeln!(self.out, "3. Update Threshold Values")?;
        writeln!(self.out, "4. Manually control pump and valve")?;
        writeln!(self.out, "5. Show station status")?;
        writeln!(self.out, "0. Quit")?;
        writeln!(self.out, "Enter your choice:")?;
        self.out.flush()
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn toggle_manual_mode(&mut self) -> io::Result<()> {
        let manual = self.engine.toggle_manual_mode();
        writeln!(
            self.out,
            "Manual Mode {}",
            if manual { "Enabled" } else { "Disabled" }
        )
    }

    fn toggle_monitoring(&mut self) -> io::Result<()> {
        let active = self.engine.toggle_monitoring();
        writeln!(
            self.out,
            "Monitoring {}",
            if active { "Resumed" } else { "Paused" }
        )
    }

    /// Returns `Ok(None)` when input ends mid-dialog.
    fn update_thresholds(&mut self) -> io::Result<Option<()>> {
        let t = self.engine.thresholds();
        let prompts = [
            format!("Enter new minimum pressure (current: {}): ", t.min_pressure),
            format!("Enter new maximum pressure (current: {}): ", t.max_pressure),
            format!("Enter new maximum flow (current: {}): ", t.max_flow),
            format!(
                "Enter new minimum water level (current: {}): ",
                t.min_water_level
            ),
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for p in &prompts {
            let Some(answer) = self.prompt(p)? else {
                return Ok(None);
            };
            answers.push(answer);
        }

        match parse_thresholds(&answers[0], &answers[1], &answers[2], &answers[3]) {
            Ok(new) => {
                self.engine.set_thresholds(new);
                if new.min_pressure >= new.max_pressure {
                    tracing::warn!(
                        min_pressure = new.min_pressure,
                        max_pressure = new.max_pressure,
                        "pump thresholds leave no hysteresis band"
                    );
                }
                writeln!(self.out, "Thresholds updated successfully!")?;
            }
            Err(e) => {
                writeln!(self.out, "Invalid input: {e}. Thresholds not changed.")?;
            }
        }
        Ok(Some(()))
    }

    /// Returns `Ok(None)` when input ends mid-dialog.
    fn control_actuators(&mut self) -> io::Result<Option<()>> {
        if !self.engine.snapshot().manual_mode {
            writeln!(
                self.out,
                "Note: automatic mode is active; the next sensor sample may override these settings."
            )?;
        }

        let Some(pump) = self.prompt("Enter the action for the pump (on/off): ")? else {
            return Ok(None);
        };
        match pump.parse::<PumpCommand>() {
            Ok(cmd) => {
                self.engine.set_pump(cmd.is_on());
                writeln!(
                    self.out,
                    "Pump is now {}.",
                    if cmd.is_on() { "ON" } else { "OFF" }
                )?;
            }
            Err(_) => writeln!(self.out, "Invalid input. Pump not changed.")?,
        }

        let Some(valve) = self.prompt("Enter the action for the valve (open/close): ")? else {
            return Ok(None);
        };
        match valve.parse::<ValveCommand>() {
            Ok(cmd) => {
                self.engine.set_valve(cmd.is_open());
                writeln!(
                    self.out,
                    "Valve is now {}.",
                    if cmd.is_open() { "OPEN" } else { "CLOSED" }
                )?;
            }
            Err(_) => writeln!(self.out, "Invalid input. Valve not changed.")?,
        }
        Ok(Some(()))
    }

    fn show_status(&mut self) -> io::Result<()> {
        let s = self.engine.snapshot();
        let t = s.thresholds;
        writeln!(
            self.out,
            "Pressure={}, Flow={}, WaterLevel={}",
            s.pressure, s.flow, s.water_level
        )?;
        writeln!(
            self.out,
            "Pump={}, Valve={}, Mode={}, Monitoring={}",
            if s.pump_active { "ON" } else { "OFF" },
            if s.valve_open { "OPEN" } else { "CLOSED" },
            if s.manual_mode { "Manual" } else { "Automatic" },
            if s.monitoring_active { "Active" } else { "Paused" }
        )?;
        writeln!(
            self.out,
            "Thresholds: min pressure={}, max pressure={}, max flow={}, min water level={}",
            t.min_pressure, t.max_pressure, t.max_flow, t.min_water_level
        )?;
        writeln!(self.out, "Log entries: {}", self.engine.log_len())
    }
}
