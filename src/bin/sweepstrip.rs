use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sweepstrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build `p<d>.png` canvases and `p<d>.jpg` strips for every parameter dimension.
    Run(RunArgs),
    /// Print every sweep key and its screenshot filenames without touching any files.
    List(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file; missing fields use the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the source screenshots.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving canvases and final strips.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    num_parameters: Option<u32>,

    #[arg(long)]
    num_steps: Option<u32>,

    /// Screenshot width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Screenshot height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Gap between screenshots in pixels.
    #[arg(long)]
    margin: Option<u32>,

    /// Width of the published JPEG.
    #[arg(long)]
    output_width: Option<u32>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Raster backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Magick)]
    backend: BackendChoice,

    /// Fail before any raster work if a screenshot is missing.
    #[arg(long)]
    check_sources: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    /// ImageMagick `convert` and `composite` on PATH.
    Magick,
    /// In-process rendering.
    Native,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::List(args) => cmd_list(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<sweepstrip::SweepConfig> {
    let mut cfg = match &args.config {
        Some(path) => sweepstrip::SweepConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => sweepstrip::SweepConfig::default(),
    };

    if let Some(dir) = &args.input_dir {
        cfg.input_image_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    cfg.num_parameters = args.num_parameters.unwrap_or(cfg.num_parameters);
    cfg.num_steps = args.num_steps.unwrap_or(cfg.num_steps);
    cfg.width = args.width.unwrap_or(cfg.width);
    cfg.height = args.height.unwrap_or(cfg.height);
    cfg.margin = args.margin.unwrap_or(cfg.margin);
    cfg.output_width = args.output_width.unwrap_or(cfg.output_width);

    cfg.validate()?;
    Ok(cfg)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.config)?;
    cfg.check_sources |= args.check_sources;

    let kind = match args.backend {
        BackendChoice::Magick => sweepstrip::BackendKind::Magick,
        BackendChoice::Native => sweepstrip::BackendKind::Native,
    };
    let mut raster = sweepstrip::create_raster(kind);

    let reports = sweepstrip::run(&cfg, raster.as_mut())?;
    for report in &reports {
        eprintln!("wrote {}", report.final_path.display());
    }
    Ok(())
}

fn cmd_list(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    for sweep in sweepstrip::enumerate_sweeps(&cfg) {
        println!("{}", sweep.key);
        for file in &sweep.files {
            println!("  {file}");
        }
    }
    Ok(())
}
