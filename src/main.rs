use clap::{Parser, Subcommand};
use replaygen::{generate, Action, Target};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "replaygen")]
#[command(about = "Replaygen - compile recorded browser sessions to automation test scripts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a test script from recorded-session JSON
    Generate {
        /// Path to a recording (.json) or a directory of recordings
        #[arg(required_unless_present = "stdin")]
        file: Option<PathBuf>,

        /// Read the recording from stdin
        #[arg(long)]
        stdin: bool,

        /// Output target
        #[arg(long, short, default_value = "playwright-js")]
        target: String,

        /// Emit a descriptive comment above each generated statement
        #[arg(long)]
        comments: bool,

        /// Write the script here instead of stdout (single recording only)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            file,
            stdin,
            target,
            comments,
            output,
        } => {
            let target: Target = match target.parse() {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if stdin {
                generate_stdin(target, comments, output.as_deref());
            } else if let Some(path) = file {
                generate_path(&path, target, comments, output.as_deref());
            } else {
                eprintln!("Error: provide a recording file/directory or use --stdin");
                std::process::exit(1);
            }
        }
    }
}

fn read_actions(source: &str, origin: &str) -> Vec<Action> {
    match serde_json::from_str(source) {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Error: {} is not a valid recording: {}", origin, e);
            std::process::exit(1);
        }
    }
}

fn generate_script(actions: &[Action], target: Target, comments: bool) -> String {
    log::debug!("generating {} script from {} actions", target, actions.len());
    match generate(actions, comments, target.id()) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_stdin(target: Target, comments: bool, output: Option<&Path>) {
    let mut source = String::new();
    if io::stdin().read_to_string(&mut source).is_err() {
        eprintln!("Error: failed to read stdin");
        std::process::exit(1);
    }

    let actions = read_actions(&source, "stdin");
    let script = generate_script(&actions, target, comments);

    match output {
        Some(path) => write_script(path, &script),
        None => print!("{}", script),
    }
}

fn generate_path(path: &Path, target: Target, comments: bool, output: Option<&Path>) {
    if path.is_file() {
        if path.extension().map_or(true, |ext| ext != "json") {
            eprintln!("Error: {} is not a .json recording", path.display());
            std::process::exit(1);
        }
        let start = Instant::now();
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: failed to read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        let actions = read_actions(&source, &path.display().to_string());
        let script = generate_script(&actions, target, comments);

        match output {
            Some(out) => {
                write_script(out, &script);
                print_summary(1, start.elapsed());
            }
            None => print!("{}", script),
        }
    } else if path.is_dir() {
        generate_directory(path, target, comments);
    } else {
        eprintln!("Error: {} does not exist", path.display());
        std::process::exit(1);
    }
}

fn generate_directory(dir: &Path, target: Target, comments: bool) {
    let start = Instant::now();
    let mut file_count = 0;

    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
    {
        let path = entry.path();
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: failed to read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        let actions = read_actions(&source, &path.display().to_string());
        let script = generate_script(&actions, target, comments);

        let output = path.with_extension(target.file_extension());
        write_script(&output, &script);
        file_count += 1;
    }

    if file_count == 0 {
        eprintln!("No .json recordings found in {}", dir.display());
        std::process::exit(1);
    }

    print_summary(file_count, start.elapsed());
}

fn write_script(path: &Path, script: &str) {
    if let Err(e) = fs::write(path, script) {
        eprintln!("Error: failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    print_generated(&path.display().to_string());
}

fn print_generated(path: &str) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("  \x1b[32m✓\x1b[0m {}", path);
    } else {
        eprintln!("  ✓ {}", path);
    }
}

fn print_summary(count: usize, elapsed: std::time::Duration) {
    let is_tty = io::stderr().is_terminal();
    let time_str = format_duration(elapsed);
    let files_word = if count == 1 { "script" } else { "scripts" };

    if is_tty {
        eprintln!(
            "\n\x1b[1m✨ Generated {} {} in {}\x1b[0m",
            count, files_word, time_str
        );
    } else {
        eprintln!("\n✨ Generated {} {} in {}", count, files_word, time_str);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}μs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
