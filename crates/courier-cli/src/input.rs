//! Parsing and validation of raw terminal input.
//!
//! Every function here is pure: it either yields a value or an [`InputError`]
//! describing what the user should fix. Re-prompting is the caller's job.

use courier_core::{Point, Priority};
use thiserror::Error;

/// Word that ends interactive location entry (any case).
pub const DONE_SENTINEL: &str = "done";

/// Input the user has to correct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter coordinates as 'x, y'.")]
    InvalidCoordinates { input: String },

    #[error("Invalid priority. Please enter 'high', 'medium', or 'low'.")]
    InvalidPriority { input: String },

    #[error("Invalid choice. Please enter 'e' or 'i'.")]
    InvalidChoice { input: String },

    #[error("Invalid stop '{input}'. Expected X,Y or X,Y:PRIORITY.")]
    InvalidStop { input: String },
}

/// Where the delivery points come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Example,
    Input,
}

/// One answer to the location prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationEntry {
    Location(Point),
    Done,
}

/// A stop given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub point: Point,
    /// Passed to the planner as-is; unknown or empty labels are visited last.
    pub label: String,
}

/// Parse the `(e)xample / (i)nput` menu answer.
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    match line.trim().to_lowercase().as_str() {
        "e" => Ok(MenuChoice::Example),
        "i" => Ok(MenuChoice::Input),
        _ => Err(InputError::InvalidChoice {
            input: line.trim().to_string(),
        }),
    }
}

/// Parse an answer to the location prompt: `x, y` with integer coordinates,
/// or the `done` sentinel.
///
/// Coordinates are limited to the `i32` range so they convert to `f64`
/// exactly.
pub fn parse_location_entry(line: &str) -> Result<LocationEntry, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(LocationEntry::Done);
    }

    let invalid = || InputError::InvalidCoordinates {
        input: line.to_string(),
    };

    let (x, y) = line.split_once(',').ok_or_else(invalid)?;
    let x: i32 = x.trim().parse().map_err(|_| invalid())?;
    let y: i32 = y.trim().parse().map_err(|_| invalid())?;

    Ok(LocationEntry::Location(Point::from((x, y))))
}

/// Parse an answer to the priority prompt. The answer is lower-cased first,
/// so `High` is accepted here even though the planner itself is
/// case-sensitive.
pub fn parse_priority(line: &str) -> Result<Priority, InputError> {
    let normalized = line.trim().to_lowercase();
    match Priority::classify(&normalized) {
        Priority::Unknown => Err(InputError::InvalidPriority {
            input: line.trim().to_string(),
        }),
        known => Ok(known),
    }
}

/// Parse a `--stop` argument of the form `X,Y` or `X,Y:PRIORITY`.
///
/// Coordinates may be fractional. The label is not validated.
pub fn parse_stop(arg: &str) -> Result<Stop, InputError> {
    let invalid = || InputError::InvalidStop {
        input: arg.to_string(),
    };

    let (coords, label) = match arg.split_once(':') {
        Some((coords, label)) => (coords, label),
        None => (arg, ""),
    };

    let (x, y) = coords.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;

    Ok(Stop {
        point: Point::new(x, y),
        label: label.trim().to_string(),
    })
}
