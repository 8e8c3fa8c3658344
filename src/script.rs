//! Line-oriented command interpreter.
//!
//! Each line holds one command and its arguments separated by whitespace:
//!
//! ```text
//! load images/koala.ppm koala
//! brighten 10 koala koala-bright
//! luma-component koala-bright koala-gray
//! save out/koala-gray.png koala-gray
//! ```
//!
//! A failing command is reported and the runner moves on to the next line.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};

use crate::image_pipeline::{
    GrayscaleKind, ImageCatalogue, ImagePipeline, apply_brightness, apply_grayscale,
};
use crate::logger::{debug, info, warn};


/// Command names accepted by [`ScriptRunner`], for help output.
pub const COMMAND_NAMES: [&str; 9] = [
    "load",
    "save",
    "brighten",
    "red-component",
    "green-component",
    "blue-component",
    "value-component",
    "intensity-component",
    "luma-component",
];

const COMPONENT_SUFFIX: &str = "-component";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load { path: String, name: String },
    Save { path: String, name: String },
    Brighten { amount: i64, source: String, dest: String },
    Grayscale { kind: GrayscaleKind, source: String, dest: String },
    Quit,
}

fn two_args<'a>(args: &[&'a str], usage: &str) -> anyhow::Result<(&'a str, &'a str)> {
    match args {
        [a, b, ..] => Ok((*a, *b)),
        _ => bail!("Wrong inputs. Usage: {}", usage),
    }
}

impl Command {
    /// Parses one tokenized, non-empty, non-comment line.
    pub fn parse(tokens: &[&str]) -> anyhow::Result<Command> {
        let Some((name, args)) = tokens.split_first() else {
            bail!("Empty command");
        };
        let lower = name.to_ascii_lowercase();

        let command = match lower.as_str() {
            "quit" | "exit" | "q" => Command::Quit,
            "load" => {
                let (path, name) = two_args(args, "load image-path image-name")?;
                Command::Load { path: path.to_string(), name: name.to_string() }
            }
            "save" => {
                let (path, name) = two_args(args, "save image-path image-name")?;
                Command::Save { path: path.to_string(), name: name.to_string() }
            }
            "brighten" => {
                let [amount, source, dest, ..] = args else {
                    bail!("Wrong inputs. Usage: brighten increment image-name dest-image-name");
                };
                let amount = amount
                    .parse::<i64>()
                    .with_context(|| format!("increment must be an integer, got '{}'", amount))?;
                Command::Brighten {
                    amount,
                    source: source.to_string(),
                    dest: dest.to_string(),
                }
            }
            other => {
                let kind = other
                    .strip_suffix(COMPONENT_SUFFIX)
                    .and_then(|k| k.parse::<GrayscaleKind>().ok());
                let Some(kind) = kind else {
                    bail!("Unknown command '{}'", name);
                };
                let usage = format!("{} image-name dest-image-name", other);
                let (source, dest) = two_args(args, &usage)?;
                Command::Grayscale {
                    kind,
                    source: source.to_string(),
                    dest: dest.to_string(),
                }
            }
        };

        Ok(command)
    }
}

/// Runs commands against an in-memory catalogue of images.
pub struct ScriptRunner<W: Write> {
    pipeline: ImagePipeline,
    catalogue: ImageCatalogue,
    output: W,
}

impl<W: Write> ScriptRunner<W> {
    pub fn new(pipeline: ImagePipeline, output: W) -> Self {
        Self {
            pipeline,
            catalogue: ImageCatalogue::new(),
            output,
        }
    }

    pub fn catalogue(&self) -> &ImageCatalogue {
        &self.catalogue
    }

    pub fn catalogue_mut(&mut self) -> &mut ImageCatalogue {
        &mut self.catalogue
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Applies one parsed command. Returns `false` once the script should stop.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<bool> {
        debug!(?command, "Executing command");
        match command {
            Command::Quit => return Ok(false),
            Command::Load { path, name } => {
                let image = self.pipeline.load_file(&path)?;
                self.catalogue.put(&name, image)?;
            }
            Command::Save { path, name } => {
                let image = self.catalogue.resolve(&name)?;
                self.pipeline.save_file(&path, image)?;
            }
            Command::Brighten { amount, source, dest } => {
                let result = apply_brightness(amount, Some(self.catalogue.resolve(&source)?))?;
                self.catalogue.put(&dest, result)?;
            }
            Command::Grayscale { kind, source, dest } => {
                let result = apply_grayscale(kind, Some(self.catalogue.resolve(&source)?))?;
                self.catalogue.put(&dest, result)?;
            }
        }
        Ok(true)
    }

    /// Runs every line of `input`, returning how many commands failed.
    ///
    /// Only failures to read the script or write messages abort the run.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<usize> {
        let mut failures = 0;

        for line in input.lines() {
            let line = line.context("failed to read script line")?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.first() {
                None => continue,
                Some(first) if first.starts_with('#') => continue,
                Some(_) => {}
            }

            let outcome = Command::parse(&tokens).and_then(|command| self.execute(command));
            match outcome {
                Ok(true) => info!(command = tokens[0], "Command complete"),
                Ok(false) => {
                    writeln!(self.output, "Exiting program...")?;
                    break;
                }
                Err(e) => {
                    failures += 1;
                    warn!(command = tokens[0], error = %e, "Command failed");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }

        self.output.flush()?;
        Ok(failures)
    }
}
