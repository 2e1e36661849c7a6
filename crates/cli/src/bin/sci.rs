use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use space_calculator::config::load_settings_or_default;
use space_calculator::format::format;
use space_calculator::scientific::{
    AngleMode, BinaryOp, Evaluation, Key, Session, UnaryFunction, apply_binary, apply_unary,
};
use spacecalc_cli::{DEFAULT_SETTINGS_PATH, LogArgs, angle_mode, setup_logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scientific calculator")]
struct Cli {
    /// Angle mode for trigonometric functions (defaults to the configured mode)
    #[arg(long, global = true)]
    angle: Option<AngleMode>,

    /// Settings file
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    #[command(flatten)]
    log: LogArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a function key to a value, e.g. `sin 30`
    Unary {
        function: UnaryFunction,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Apply an operator, e.g. `2 ^ 10`
    Binary {
        #[arg(allow_negative_numbers = true)]
        lhs: f64,
        op: BinaryOp,
        #[arg(allow_negative_numbers = true)]
        rhs: f64,
    },
    /// Replay keypad presses, e.g. `12 + 3 = sqrt`
    Keys {
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// List the function keys
    Functions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log)?;
    let settings = load_settings_or_default(&cli.config)?;
    let mode = cli.angle.unwrap_or(angle_mode(settings.angle_mode));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Unary { function, value } => match apply_unary(function, value, mode)? {
            Evaluation::Value(result) => writeln!(out, "{}", format(result))?,
            Evaluation::RequiresSecondOperand(op) => {
                bail!(
                    "{} takes two operands; use `binary <lhs> {} <rhs>`",
                    function,
                    op.symbol()
                )
            }
        },
        Command::Binary { lhs, op, rhs } => {
            writeln!(out, "{}", format(apply_binary(op, lhs, rhs)))?;
        }
        Command::Keys { tokens } => {
            let mut keys = Vec::new();
            for token in &tokens {
                keys.extend(Key::parse_token(token)?);
            }
            debug!(count = keys.len(), ?mode, "replaying keys");
            let session = Session::new(mode).press_all(keys)?;
            let display = session.display();
            if !display.previous.is_empty() {
                writeln!(out, "{}", display.previous)?;
            }
            writeln!(out, "{}", display.current)?;
        }
        Command::Functions => {
            for function in UnaryFunction::ALL {
                writeln!(out, "{function}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
