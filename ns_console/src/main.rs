//! # Namespace Shell
//!
//! Runs console commands against an in-memory namespace.

use ns_console::{load_config_file, run_script, CommandHandler};
use services_logger::LogLevel;
use services_namespace::NamespaceConfig;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

/// Options collected from the command line
#[derive(Debug, Default)]
struct ShellOptions {
    config: Option<PathBuf>,
    separator: Option<char>,
    drive: Option<String>,
    script: Option<PathBuf>,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nsh");

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: ShellOptions) -> Result<(), String> {
    let mut config = match &options.config {
        Some(path) => load_config_file(path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => NamespaceConfig::default(),
    };
    if let Some(separator) = options.separator {
        config.separator = separator;
    }
    if let Some(drive) = options.drive {
        config.main_drive = drive;
    }
    if options.verbose {
        config.log_level = LogLevel::Debug;
    }

    let mut handler = CommandHandler::new(config).map_err(|e| e.to_string())?;
    let mut stdout = io::stdout().lock();

    let summary = match &options.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to read script file {}: {}", path.display(), e))?;
            run_script(&mut handler, BufReader::new(file), &mut stdout)
        }
        None => run_script(&mut handler, io::stdin().lock(), &mut stdout),
    }
    .map_err(|e| e.to_string())?;

    if options.verbose {
        eprintln!("{}", handler.log());
        eprintln!(
            "{} commands succeeded, {} failed",
            summary.succeeded, summary.failed
        );
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<ShellOptions, String> {
    let mut options = ShellOptions::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                options.config = Some(PathBuf::from(value_for(args, &mut i, "--config")?));
            }
            "--separator" => {
                let value = value_for(args, &mut i, "--separator")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(separator), None) => options.separator = Some(separator),
                    _ => return Err(format!("Separator must be one character: {}", value)),
                }
            }
            "--drive" | "-d" => {
                options.drive = Some(value_for(args, &mut i, "--drive")?.to_string());
            }
            "--script" | "-s" => {
                options.script = Some(PathBuf::from(value_for(args, &mut i, "--script")?));
            }
            "--verbose" | "-v" => {
                options.verbose = true;
            }
            "--help" | "-h" => {
                print_usage(args.first().map(String::as_str).unwrap_or("nsh"));
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      JSON namespace configuration");
    eprintln!("  --separator <CHAR>       Path separator (default: \\)");
    eprintln!("  -d, --drive <NAME>       Main drive name (default: C:)");
    eprintln!("  -s, --script <FILE>      Command script (default: stdin)");
    eprintln!("  -v, --verbose            Print the operation log on exit");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script demos/namespace_demo.nsh", program);
    eprintln!("  echo 'mkdir C: docs' | {} --verbose", program);
}
