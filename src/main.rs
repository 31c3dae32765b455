use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use qrform::{events, FormConfig, SubmitOutcome};

#[derive(Parser)]
#[command(name = "qrform", about = "Drive the QR form controller from the command line")]
struct Cli {
    /// JSON form config (default size, slider attributes)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type `text`, optionally an exact size, and submit once
    Generate {
        #[arg(long)]
        text: String,
        /// Exact size as typed into the size field
        #[arg(long)]
        size: Option<String>,
        /// Write SVG here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print a data: URL instead of raw SVG
        #[arg(long)]
        data_url: bool,
    },
    /// Replay JSON-line events and print a snapshot after each
    Replay {
        /// Script file; stdin when omitted
        script: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FormConfig> {
    match path {
        Some(p) => FormConfig::from_file(p)
            .with_context(|| format!("loading config from {}", p.display())),
        None => Ok(FormConfig::default()),
    }
}

fn generate(
    config: FormConfig,
    text: &str,
    size: Option<&str>,
    out: Option<&PathBuf>,
    data_url: bool,
) -> anyhow::Result<()> {
    let mut controller = qrform::new_controller(config)?;
    controller.on_text_input(text);
    if let Some(raw) = size {
        controller.on_size_input(raw);
        controller.on_size_blur();
    }

    match controller.on_submit()? {
        SubmitOutcome::Invalid => bail!("{}", qrform::form::EMPTY_INPUT_MESSAGE),
        SubmitOutcome::Generated { size } => {
            let symbol = controller
                .form()
                .output
                .symbol
                .as_ref()
                .context("renderer produced no output")?;
            let body = if data_url {
                symbol.data_url()
            } else {
                symbol.markup.clone()
            };
            match out {
                Some(path) => {
                    std::fs::write(path, body)
                        .with_context(|| format!("writing {}", path.display()))?;
                    eprintln!("wrote {}px symbol to {}", size, path.display());
                }
                None => println!("{}", body),
            }
        }
    }
    Ok(())
}

fn replay(config: FormConfig, script: Option<&PathBuf>) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match script {
        Some(p) => Box::new(BufReader::new(
            File::open(p).with_context(|| format!("opening {}", p.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut controller = qrform::new_controller(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let event = match events::parse_line(&line) {
            Ok(Some(ev)) => ev,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("line {}: {}", idx + 1, e);
                continue;
            }
        };
        if let Err(e) = controller.dispatch(&event) {
            eprintln!("line {}: {}", idx + 1, e);
        }
        writeln!(out, "{}", serde_json::to_string(&controller.snapshot())?)?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Generate {
            text,
            size,
            out,
            data_url,
        } => generate(config, &text, size.as_deref(), out.as_ref(), data_url),
        Command::Replay { script } => replay(config, script.as_ref()),
    }
}
