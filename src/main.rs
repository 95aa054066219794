use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bilevel_dither::Method;
use ditherlab::models::{describe_buffer, AppConfig, ChannelModeSetting};
use ditherlab::rendering::{output_path, read_png, write_png};
use ditherlab::services::{dither_service, DitherService};

#[derive(Parser)]
#[command(name = "ditherlab")]
#[command(about = "Bilevel dithering and image quality scoring for PNG files")]
struct Cli {
    /// YAML configuration file (defaults to $DITHERLAB_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG and report PSNR/SSIM against the input
    Dither {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Method selector: bayer, fs, stucki, jjn, rong
        #[arg(short, long)]
        method: Option<String>,

        /// Output PNG file (defaults to <stem>_<method>.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dither the luma plane or each RGB channel
        #[arg(long, value_enum)]
        mode: Option<ChannelModeSetting>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a candidate PNG against a reference PNG
    Compare {
        reference: PathBuf,
        candidate: PathBuf,

        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available dithering methods
    Methods,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherlab=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Dither {
            input,
            method,
            output,
            mode,
            json,
        } => {
            let mut config = AppConfig::load(cli.config.as_deref());
            if let Some(mode) = mode {
                config.channel_mode = mode;
            }
            run_dither_command(config, &input, method.as_deref(), output, json)
        }
        Commands::Compare {
            reference,
            candidate,
            json,
        } => run_compare_command(&reference, &candidate, json),
        Commands::Methods => {
            for method in Method::ALL {
                println!("{:<8} {}", method.selector(), method.display_name());
            }
            Ok(())
        }
    }
}

fn run_dither_command(
    config: AppConfig,
    input: &Path,
    method: Option<&str>,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let service = DitherService::new(config);
    let method = service.resolve_method(method)?;

    let buffer = read_png(input)?;
    if !json {
        println!("{}", describe_buffer(&buffer));
    }

    let outcome = service.dither(&buffer, method, None)?;

    let output = match output {
        Some(path) => path,
        None if service.config().output_suffix => output_path(input, method),
        None => anyhow::bail!("No --output given and output_suffix is disabled"),
    };
    write_png(&output, &outcome.output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        println!("{}", outcome.report);
        println!("Saved to {}", output.display());
    }
    Ok(())
}

fn run_compare_command(reference: &Path, candidate: &Path, json: bool) -> anyhow::Result<()> {
    let reference = read_png(reference)?;
    let candidate = read_png(candidate)?;
    let quality = dither_service::score(&reference, &candidate)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&quality)?);
    } else {
        println!("{}", quality);
    }
    Ok(())
}
