use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use pixel_editor_rs::image_pipeline::{EditorConfig, ImagePipeline};
use pixel_editor_rs::logger;
use pixel_editor_rs::script::{COMMAND_NAMES, ScriptRunner};

use tracing::{error, info};

fn usage() {
    eprintln!("Usage:");
    eprintln!("  pixel_editor -text            - Run in interactive text mode");
    eprintln!("  pixel_editor -file <script>   - Execute script file");
    eprintln!("  pixel_editor <script>         - Execute script file");
}

fn run_script_file(path: &str) -> anyhow::Result<usize> {
    let file = File::open(path).with_context(|| format!("Script file not found: {}", path))?;
    let mut runner = ScriptRunner::new(ImagePipeline::new(EditorConfig::default()), io::stdout().lock());
    let failures = runner.run(BufReader::new(file))?;
    println!("Script processing completed.");
    Ok(failures)
}

fn run_interactive() -> anyhow::Result<usize> {
    println!("Welcome to the pixel editor");
    println!("Commands: {}", COMMAND_NAMES.join(", "));
    println!("Type 'quit' or 'exit' to close the program");

    let mut runner = ScriptRunner::new(ImagePipeline::new(EditorConfig::default()), io::stdout());
    runner.run(io::stdin().lock())
}

fn main() -> ExitCode {
    logger::init_with_default("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [flag] if flag == "-text" => run_interactive(),
        [flag, path] if flag == "-file" => run_script_file(path),
        [path] => run_script_file(path),
        _ => {
            eprintln!("Invalid command line arguments.");
            usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(failures) => {
            info!(failures, "Finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
