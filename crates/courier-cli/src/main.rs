//! # Courier CLI
//!
//! Terminal front end for the priority route planner: the example data set,
//! interactive entry, or stops given on the command line.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use courier_core::Point;
use courier_planner::{PriorityRoutePlanner, RoutePlanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod input;
mod output;
mod prompt;

use input::{parse_stop, MenuChoice, Stop};
use prompt::{Deliveries, Prompter};

#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(about = "Plan a priority-ordered delivery route", long_about = None, version)]
struct Cli {
    /// Print the plan as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show the length of every leg
    #[arg(long, global = true)]
    legs: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan the built-in example data set
    Example,
    /// Enter delivery points interactively
    Input,
    /// Plan the stops given as arguments
    Plan {
        /// A stop as X,Y or X,Y:PRIORITY (repeatable)
        #[arg(long = "stop", value_name = "X,Y:PRIORITY", value_parser = parse_stop)]
        stops: Vec<Stop>,
    },
}

/// The reference data set offered by the menu.
fn example_deliveries() -> Deliveries {
    let locations = [(0, 0), (2, 3), (5, 1), (6, 4), (1, 2)]
        .into_iter()
        .map(|(x, y): (i32, i32)| Point::from((x, y)))
        .collect();
    let priorities = ["high", "medium", "high", "low", "medium"]
        .into_iter()
        .map(String::from)
        .collect();
    (locations, priorities)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "courier=debug,courier_planner=debug"
    } else {
        "courier=warn,courier_planner=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Gather deliveries interactively. `None` means there is nothing to plan.
fn interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    ask_source: bool,
) -> anyhow::Result<Option<Deliveries>> {
    let choice = if ask_source {
        match prompter.choose_source()? {
            Some(choice) => choice,
            None => return Ok(None),
        }
    } else {
        MenuChoice::Input
    };

    match choice {
        MenuChoice::Example => Ok(Some(example_deliveries())),
        MenuChoice::Input => {
            let deliveries = prompter.collect_deliveries()?;
            if deliveries.0.is_empty() {
                prompter.say("No locations entered. Exiting.")?;
                return Ok(None);
            }
            Ok(Some(deliveries))
        }
    }
}

/// Plan and report a route. The plan goes to `writer`; menus, prompts and
/// input feedback go to `prompts`.
fn run<R: BufRead, W: Write, P: Write>(
    cli: &Cli,
    input: R,
    mut writer: W,
    mut prompts: P,
) -> anyhow::Result<()> {
    if !cli.json {
        writeln!(writer, "--- Smart Delivery Route Planner ---")?;
        writer.flush()?;
    }

    let deliveries = match &cli.command {
        Some(Commands::Example) => Some(example_deliveries()),
        Some(Commands::Plan { stops }) => Some(
            stops
                .iter()
                .map(|stop| (stop.point, stop.label.clone()))
                .unzip::<_, _, Vec<Point>, Vec<String>>(),
        ),
        Some(Commands::Input) => interactive(&mut Prompter::new(input, &mut prompts), false)?,
        None => interactive(&mut Prompter::new(input, &mut prompts), true)?,
    };

    let Some((locations, priorities)) = deliveries else {
        return Ok(());
    };

    info!(stops = locations.len(), "Planning route");
    let plan = PriorityRoutePlanner::new()
        .plan(&locations, &priorities)
        .context("failed to plan route")?;

    if cli.json {
        writeln!(writer, "{}", output::render_json(&plan)?)?;
    } else {
        write!(
            writer,
            "{}",
            output::render_text(&locations, &priorities, &plan, cli.legs)
        )?;
    }
    writer.flush()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    // Under --json stdout carries nothing but the plan.
    if cli.json {
        run(&cli, stdin.lock(), io::stdout(), io::stderr())
    } else {
        run(&cli, stdin.lock(), io::stdout(), io::stdout())
    }
}
