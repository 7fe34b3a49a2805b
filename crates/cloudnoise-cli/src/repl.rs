//! Line-oriented command loop over the colour grid.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cloudnoise_core::{ColourGrid, Command};
use log::warn;

use crate::export::save_png;

pub const HELP: &str = "Available commands
  adjust [contrast] [brightness]   contrast at most 255; prompts for missing values
  filter                           XOR every pixel with (127, 127, 254)
  save [path]                      write the grid as a PNG
  help                             show this message
  quit                             leave";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    /// `adjust` with one or both values still to be prompted for.
    PartialAdjust { contrast: Option<f32> },
    SaveAs(PathBuf),
    Quit,
    Empty,
    Unknown(String),
}

/// Parse a single line. Keywords are case-insensitive.
pub fn parse_line(line: &str) -> Result<Input> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(Input::Empty);
    };
    let args: Vec<&str> = words.collect();

    let input = match keyword.to_lowercase().as_str() {
        "adjust" => match args.as_slice() {
            [] => Input::PartialAdjust { contrast: None },
            [c] => Input::PartialAdjust { contrast: Some(parse_number(c, "contrast")?) },
            [c, b] => Input::Command(Command::Adjust {
                contrast: parse_number(c, "contrast")?,
                brightness: parse_number(b, "brightness")?,
            }),
            _ => bail!("adjust takes at most two values"),
        },
        "filter" => Input::Command(Command::filter()),
        "save" => match args.as_slice() {
            [] => Input::Command(Command::Save),
            [path] => Input::SaveAs(PathBuf::from(path)),
            _ => bail!("save takes at most one path"),
        },
        "help" => Input::Command(Command::Help),
        "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    };
    Ok(input)
}

fn parse_number(word: &str, what: &str) -> Result<f32> {
    word.parse::<f32>()
        .with_context(|| format!("{what} modifier '{word}' is not a number"))
}

/// Drives the command loop until `quit` or end of input.
pub struct Session<'a, R, W> {
    grid: &'a mut ColourGrid,
    input: R,
    out: W,
    default_output: PathBuf,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(grid: &'a mut ColourGrid, input: R, out: W, default_output: impl Into<PathBuf>) -> Self {
        Self { grid, input, out, default_output: default_output.into() }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.prompt("Enter command (or 'help'): ")? else {
                return Ok(());
            };
            let outcome = parse_line(&line).and_then(|input| self.handle(input));
            match outcome {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => {
                    warn!("command failed: {e:#}");
                    writeln!(self.out, "Error: {e:#}")?;
                }
            }
        }
    }

    /// Returns `false` when the loop should stop.
    fn handle(&mut self, input: Input) -> Result<bool> {
        match input {
            Input::Command(command) => self.execute(command)?,
            Input::PartialAdjust { contrast } => {
                let contrast = match contrast {
                    Some(c) => c,
                    None => self.prompt_number("Contrast modifier: ", "contrast")?,
                };
                let brightness = self.prompt_number("Brightness modifier: ", "brightness")?;
                self.execute(Command::Adjust { contrast, brightness })?;
            }
            Input::SaveAs(path) => self.save(&path)?,
            Input::Quit => return Ok(false),
            Input::Empty => {}
            Input::Unknown(word) => writeln!(self.out, "Unknown command '{word}'. Type 'help'.")?,
        }
        Ok(true)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        self.grid.apply(command)?;
        if command.mutates() {
            writeln!(self.out, "Done.")?;
            return Ok(());
        }
        match command {
            Command::Save => {
                let path = self.default_output.clone();
                self.save(&path)?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Adjust { .. } | Command::Filter { .. } => {}
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        save_png(&*self.grid, path)?;
        writeln!(self.out, "Saved {}", path.display())?;
        Ok(())
    }

    /// Print `text` and read one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading command input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(&mut self, text: &str, what: &str) -> Result<f32> {
        match self.prompt(text)? {
            Some(line) => parse_number(&line, what),
            None => bail!("input ended while waiting for the {what} modifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudnoise_core::{CloudGenerator, Colour, NoiseConfig};
    use std::io::Cursor;

    fn grid() -> ColourGrid {
        CloudGenerator::new()
            .generate(&NoiseConfig::new(8, 8, 3).with_seed(5))
            .unwrap()
            .colours
    }

    fn run(grid: &mut ColourGrid, script: &str) -> String {
        let mut out = Vec::new();
        Session::new(grid, Cursor::new(script.to_string()), &mut out, std::env::temp_dir().join("cloudnoise-unused.png"))
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(parse_line("FILTER").unwrap(), Input::Command(Command::filter()));
        assert_eq!(parse_line("Help").unwrap(), Input::Command(Command::Help));
        assert_eq!(parse_line("save").unwrap(), Input::Command(Command::Save));
        assert_eq!(parse_line("exit").unwrap(), Input::Quit);
        assert_eq!(parse_line("   ").unwrap(), Input::Empty);
        assert_eq!(parse_line("terrain").unwrap(), Input::Unknown("terrain".into()));
    }

    #[test]
    fn parses_adjust_forms() {
        assert_eq!(
            parse_line("adjust 40 -12.5").unwrap(),
            Input::Command(Command::Adjust { contrast: 40.0, brightness: -12.5 })
        );
        assert_eq!(parse_line("adjust").unwrap(), Input::PartialAdjust { contrast: None });
        assert_eq!(parse_line("adjust 3").unwrap(), Input::PartialAdjust { contrast: Some(3.0) });
        assert!(parse_line("adjust x 1").is_err());
        assert!(parse_line("adjust 1 2 3").is_err());
    }

    #[test]
    fn parses_save_path() {
        assert_eq!(parse_line("save out.png").unwrap(), Input::SaveAs(PathBuf::from("out.png")));
    }

    #[test]
    fn filter_twice_round_trips_through_session() {
        let original = grid();
        let mut g = original.clone();
        run(&mut g, "filter\nfilter\nquit\n");
        assert_eq!(g, original);
    }

    #[test]
    fn adjust_prompts_for_missing_values() {
        let mut g = grid();
        let out = run(&mut g, "adjust\n0\n255\n");
        assert!(out.contains("Contrast modifier: "));
        assert!(out.contains("Brightness modifier: "));
        assert!(g.rows().flatten().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn failed_command_reports_and_continues() {
        let original = grid();
        let mut g = original.clone();
        let out = run(&mut g, "adjust 258.9 0\nbogus\nhelp\n");
        assert!(out.contains("Error: contrast 258.9 exceeds 255"));
        assert!(out.contains("Unknown command 'bogus'"));
        assert!(out.contains("Available commands"));
        assert_eq!(g, original);
    }

    #[test]
    fn save_with_path_writes_png() {
        let path = std::env::temp_dir().join(format!("cloudnoise-repl-{}.png", std::process::id()));
        let mut g = grid();
        let out = run(&mut g, &format!("save {}\n", path.display()));
        assert!(out.contains("Saved"));
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }
}
