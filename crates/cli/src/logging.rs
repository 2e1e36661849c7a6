use anyhow::anyhow;
use clap::{ArgAction, Args};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Verbosity flags shared by every binary.
#[derive(Args, Debug, Clone, Copy)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install the global stderr subscriber. `RUST_LOG` wins over the flags when set.
pub fn setup_logging(args: &LogArgs) -> anyhow::Result<()> {
    let filter = if args.quiet {
        EnvFilter::default().add_directive(LevelFilter::OFF.into())
    } else {
        EnvFilter::builder()
            .with_default_directive(args.level().into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}
