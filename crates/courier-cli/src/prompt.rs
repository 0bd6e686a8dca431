//! Interactive prompting.

use std::io::{self, BufRead, Write};

use courier_core::Point;
use tracing::debug;

use crate::input::{
    parse_location_entry, parse_menu_choice, parse_priority, LocationEntry, MenuChoice,
};

/// Locations with their priority labels, index-aligned.
pub type Deliveries = (Vec<Point>, Vec<String>);

/// Asks questions on `output` and reads answers from `input`, one line each.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` means end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print a line of feedback.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Ask for the data source until a valid answer is given.
    pub fn choose_source(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.ask("Use (e)xample data or (i)nput your own? (e/i): ")? else {
                return Ok(None);
            };
            match parse_menu_choice(&line) {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Read delivery points until the user types `done` or input ends.
    ///
    /// A location whose priority was never answered is discarded so the two
    /// sequences stay aligned.
    pub fn collect_deliveries(&mut self) -> io::Result<Deliveries> {
        let mut locations = Vec::new();
        let mut priorities = Vec::new();

        self.say("\n--- Enter Your Delivery Points ---")?;
        self.say("Enter 'done' when you are finished.")?;

        loop {
            let prompt = format!(
                "Enter location {} (e.g., '2, 3') or 'done': ",
                locations.len()
            );
            let Some(line) = self.ask(&prompt)? else {
                break;
            };

            let point = match parse_location_entry(&line) {
                Ok(LocationEntry::Done) => break,
                Ok(LocationEntry::Location(point)) => point,
                Err(e) => {
                    self.say(&e.to_string())?;
                    continue;
                }
            };

            match self.ask_priority(point)? {
                Some(label) => {
                    debug!(%point, %label, "Accepted delivery point");
                    locations.push(point);
                    priorities.push(label);
                }
                None => break,
            }
        }

        Ok((locations, priorities))
    }

    fn ask_priority(&mut self, point: Point) -> io::Result<Option<String>> {
        let prompt = format!("  Enter priority for {} (high/medium/low): ", point);
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match parse_priority(&line) {
                Ok(priority) => return Ok(Some(priority.to_string())),
                Err(e) => self.say(&format!("  {}", e))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output).unwrap()
    }

    #[test]
    fn test_choose_source_retries() {
        let mut p = prompter("x\n\nI\n");
        assert_eq!(p.choose_source().unwrap(), Some(MenuChoice::Input));

        let out = transcript(p);
        assert_eq!(out.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn test_choose_source_eof() {
        let mut p = prompter("");
        assert_eq!(p.choose_source().unwrap(), None);
    }

    #[test]
    fn test_collect_deliveries() {
        let mut p = prompter("2, 3\nHIGH\n1,1\nsoon\nlow\ndone\n");
        let (locations, priorities) = p.collect_deliveries().unwrap();

        assert_eq!(locations, vec![Point::new(2.0, 3.0), Point::new(1.0, 1.0)]);
        assert_eq!(priorities, vec!["high", "low"]);

        let out = transcript(p);
        assert!(out.contains("Enter location 1 (e.g., '2, 3') or 'done': "));
        assert!(out.contains("  Invalid priority."));
    }

    #[test]
    fn test_collect_deliveries_reprompts_bad_coordinates() {
        let mut p = prompter("two, three\n4,5\nmedium\nDone\n");
        let (locations, priorities) = p.collect_deliveries().unwrap();

        assert_eq!(locations, vec![Point::new(4.0, 5.0)]);
        assert_eq!(priorities, vec!["medium"]);
        assert!(transcript(p).contains("Please enter coordinates as 'x, y'."));
    }

    #[test]
    fn test_collect_deliveries_drops_unfinished_point_at_eof() {
        let mut p = prompter("1,2\nhigh\n3,4\n");
        let (locations, priorities) = p.collect_deliveries().unwrap();

        assert_eq!(locations, vec![Point::new(1.0, 2.0)]);
        assert_eq!(priorities.len(), 1);
    }

    #[test]
    fn test_collect_deliveries_nothing_entered() {
        let mut p = prompter("done\n");
        let (locations, priorities) = p.collect_deliveries().unwrap();
        assert!(locations.is_empty());
        assert!(priorities.is_empty());
    }
}
