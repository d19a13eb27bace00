use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the portfolio as a static HTML page.
    Render(RenderArgs),
    /// Print the visibility of every section at one scroll position.
    Visibility(VisibilityArgs),
    /// Replay an event script against a headless page and print its final state.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Content JSON, a path or an http(s) URL. Defaults to the config's `data_source`.
    #[arg(long)]
    data: Option<String>,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail instead of writing an empty page when the content cannot be loaded.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct VisibilityArgs {
    /// Scroll progress in [0, 1]; out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    progress: f64,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Content JSON, a path or an http(s) URL. Defaults to the config's `data_source`.
    #[arg(long)]
    data: Option<String>,

    /// Event script JSON (an array of steps).
    #[arg(long)]
    script: PathBuf,

    /// Site config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Full document height of the simulated page.
    #[arg(long, default_value_t = 6000.0)]
    scroll_height: f64,

    /// Viewport height of the simulated page.
    #[arg(long, default_value_t = 1000.0)]
    viewport_height: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    folio::telemetry::init_logger(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Visibility(args) => cmd_visibility(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<folio::SiteConfig> {
    let config = match path {
        Some(p) => folio::SiteConfig::from_path(p)
            .with_context(|| format!("load site config '{}'", p.display()))?,
        None => folio::SiteConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_content(
    data: Option<&str>,
    config: &folio::SiteConfig,
) -> anyhow::Result<folio::FolioResult<folio::ContentBundle>> {
    let source = folio::ContentSource::parse(data.unwrap_or(&config.data_source));
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    let loader = folio::ContentLoader::new();
    Ok(rt.block_on(loader.load(&source)))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let content = load_content(args.data.as_deref(), &config)?;
    let content = match content {
        Err(e) if args.strict => return Err(e).context("load content"),
        other => other,
    };

    let html = folio::render_static_page(&config, content)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, html)
        .with_context(|| format!("write page '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_visibility(args: VisibilityArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let mut engine = folio::ScrollEngine::new(config.schedule, config.interactivity_threshold)?;
    engine.update(folio::ScrollProgress::new(args.progress));
    let out = serde_json::to_string_pretty(&engine.snapshot())
        .context("serialize visibility snapshot")?;
    println!("{out}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let steps = read_script(&args.script)?;
    let content = load_content(args.data.as_deref(), &config)?;

    let mut host = folio::HeadlessHost::with_page_skeleton(folio::ScrollMetrics {
        offset_y: 0.0,
        scroll_height: args.scroll_height,
        viewport_height: args.viewport_height,
    });
    let mut session = folio::Session::new(config)?;
    session.boot(&mut host);
    session.content_loaded(&mut host, content)?;
    folio::run_script(&mut session, &mut host, &steps);

    let out = serde_json::to_string_pretty(&host).context("serialize host state")?;
    println!("{out}");
    Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<folio::ScriptStep>> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let r = BufReader::new(f);
    let steps: Vec<folio::ScriptStep> =
        serde_json::from_reader(r).with_context(|| "parse script JSON")?;
    Ok(steps)
}
