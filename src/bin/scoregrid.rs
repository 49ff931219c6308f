use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scoregrid::Config;

#[derive(Parser, Debug)]
#[command(name = "scoregrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every record into paginated page images.
    Render(RenderArgs),
    /// Render a single record's card as a PNG.
    Card(CardArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input play-history CSV. Defaults to the configured path.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Deployment config JSON. Defaults to the built-in deployment.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file prefix.
    #[arg(long, default_value = "score")]
    prefix: String,

    /// Override the configured output directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Input play-history CSV. Defaults to the configured path.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Deployment config JSON. Defaults to the built-in deployment.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record index (0-based).
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Card(args) => cmd_card(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Ok(Config::from_path(p)?),
        None => {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dir) = args.out_dir {
        config.output_dir = dir;
    }

    let report = scoregrid::run(&config, args.in_path.as_deref(), &args.prefix)?;
    eprintln!("{report}");
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let csv = args.in_path.as_deref().unwrap_or(&config.csv_path);

    let records = scoregrid::load_records(csv, config.max_records)?;
    let record = records
        .get(args.index)
        .with_context(|| format!("record index {} out of range ({} records)", args.index, records.len()))?;

    let mut renderer = scoregrid::build_card_renderer(&config);
    let card = renderer.render(record);

    scoregrid::ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &card.image,
        card.image.width(),
        card.image.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} of {} fields drawn)",
        args.out.display(),
        card.drawn(),
        card.outcomes.len()
    );
    Ok(())
}
