mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use commands::{inspect_mounts, list_mounts, print_mounts};
use mountopt::MountOpt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mountopt")]
#[command(about = "Parse container --mount specifications")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MountArgs {
    /// Attach a filesystem mount (type=bind,source=SRC,target=DST,...)
    #[arg(long = "mount", value_name = "SPEC", required = true)]
    mounts: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse mounts and print a one-line summary
    Parse {
        #[command(flatten)]
        args: MountArgs,

        /// Print the parsed mounts as JSON
        #[arg(long)]
        json: bool,
    },
    /// List parsed mounts as a table
    #[command(visible_alias = "list")]
    Ls {
        #[command(flatten)]
        args: MountArgs,
    },
    /// Display detailed information on each parsed mount
    Inspect {
        #[command(flatten)]
        args: MountArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { args, json } => {
            let opt = collect_mounts(&args.mounts)?;
            print_mounts(&opt, json)?;
        }
        Commands::Ls { args } => {
            let opt = collect_mounts(&args.mounts)?;
            list_mounts(&opt);
        }
        Commands::Inspect { args } => {
            let opt = collect_mounts(&args.mounts)?;
            inspect_mounts(&opt);
        }
    }

    Ok(())
}

fn collect_mounts(specs: &[String]) -> Result<MountOpt, Box<dyn std::error::Error>> {
    let opt = MountOpt::new();

    for spec in specs {
        opt.set(spec).map_err(|e| {
            format!(
                "invalid argument \"{}\" for \"--{}\" flag: {}",
                spec,
                opt.type_name(),
                e
            )
        })?;
    }

    tracing::debug!("Collected {} mount(s)", opt.len());
    Ok(opt)
}
