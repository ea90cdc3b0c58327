//! Interactive ride planning loop

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use ridepath::{
    SAME_LOCATION, format_ride_details, is_quit, is_yes, normalize_location, ride_details_json,
    user_message,
};
use ridepath_core::{Error, RoadGraph, build_report, find_path};
use tracing::debug;

use crate::{CliError, config::OutputFormat};

/// Solve one ride and render it in the requested format
pub fn plan_ride(
    graph: &RoadGraph,
    pickup: &str,
    dropoff: &str,
    format: OutputFormat,
    departure: NaiveDateTime,
) -> Result<String, Error> {
    let found = find_path(graph, pickup, dropoff)?;
    let report = build_report(&found.path, graph)?;
    debug!(
        "Ride {pickup} -> {dropoff}: {} segments, routing cost {:.1}",
        report.segments.len(),
        found.cost
    );

    Ok(match format {
        OutputFormat::Table => format_ride_details(&report, departure),
        OutputFormat::Json => format!("{:#}", ride_details_json(&report, departure)),
    })
}

/// Result of a one-shot ride request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideOutcome {
    Planned,
    /// Request refused with a message to the rider
    Rejected,
}

/// Plan a single ride from raw command-line names.
///
/// Details go to `output`; rider-facing problems go to `errors`.
pub fn route_once(
    graph: &RoadGraph,
    pickup: &str,
    dropoff: &str,
    format: OutputFormat,
    departure: NaiveDateTime,
    output: &mut impl Write,
    errors: &mut impl Write,
) -> Result<RideOutcome, CliError> {
    let pickup = normalize_location(pickup);
    let dropoff = normalize_location(dropoff);
    if pickup == dropoff {
        writeln!(errors, "{SAME_LOCATION}")?;
        return Ok(RideOutcome::Rejected);
    }

    match plan_ride(graph, &pickup, &dropoff, format, departure) {
        Ok(details) => {
            writeln!(output, "{details}")?;
            Ok(RideOutcome::Planned)
        }
        Err(err) if err.is_recoverable() => {
            writeln!(errors, "{}", user_message(&err))?;
            Ok(RideOutcome::Rejected)
        }
        Err(err) => Err(err.into()),
    }
}

/// Enumerated, alphabetical list of locations
pub fn list_locations(graph: &RoadGraph, output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "\nAvailable Locations:")?;
    for (i, name) in graph.locations().into_iter().enumerate() {
        writeln!(output, "{}. {name}", i + 1)?;
    }
    Ok(())
}

enum Answer {
    Location(String),
    Retry,
    Quit,
}

pub struct Session<'a, R, W, C> {
    graph: &'a RoadGraph,
    input: R,
    output: W,
    format: OutputFormat,
    clock: C,
}

impl<'a, R, W, C> Session<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: Fn() -> NaiveDateTime,
{
    pub fn new(graph: &'a RoadGraph, input: R, output: W, format: OutputFormat, clock: C) -> Self {
        Self {
            graph,
            input,
            output,
            format,
            clock,
        }
    }

    /// Print `message` and read one line; `None` on end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a location and check it is part of the graph
    fn location(&mut self, message: &str) -> Result<Answer, CliError> {
        let Some(line) = self.prompt(message)? else {
            return Ok(Answer::Quit);
        };
        if is_quit(&line) {
            return Ok(Answer::Quit);
        }
        let name = normalize_location(&line);
        if self.graph.contains(&name) {
            return Ok(Answer::Location(name));
        }
        writeln!(
            self.output,
            "{}",
            user_message(&Error::UnknownLocation(name))
        )?;
        Ok(Answer::Retry)
    }

    pub fn run(mut self) -> Result<(), CliError> {
        writeln!(self.output, "\nRide Route Finder\n{}", "=".repeat(50))?;
        list_locations(self.graph, &mut self.output)?;

        loop {
            writeln!(self.output, "\n{}", "=".repeat(50))?;

            let pickup = match self.location("\nEnter pickup location (or 'quit' to exit): ")? {
                Answer::Quit => break,
                Answer::Retry => continue,
                Answer::Location(name) => name,
            };
            let dropoff = match self.location("Enter drop-off location: ")? {
                Answer::Quit => break,
                Answer::Retry => continue,
                Answer::Location(name) => name,
            };

            if pickup == dropoff {
                writeln!(self.output, "{SAME_LOCATION}")?;
                continue;
            }

            match plan_ride(self.graph, &pickup, &dropoff, self.format, (self.clock)()) {
                Ok(details) => writeln!(self.output, "{details}")?,
                Err(err) if err.is_recoverable() => {
                    writeln!(self.output, "{}", user_message(&err))?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            match self.prompt("\nPlan another ride? (yes/no): ")? {
                Some(answer) if is_yes(&answer) => {}
                _ => break,
            }
        }

        writeln!(self.output, "\nThank you for riding!")?;
        Ok(())
    }
}
