// File: crates/graphcalc/src/main.rs
// Summary: Graphing calculator CLI; prompts for origin, ratio and expressions, renders curves to a PNG.

mod app;
mod input;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use graph_core::{GraphConfig, SessionOptions};
use graph_render_skia::RenderOptions;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::Plotter;
use crate::input::{expression_loop, parse_origin, parse_ratio, prompt_line, INTERRUPT_MESSAGE, ORIGIN_PROMPT, RATIO_PROMPT};

#[derive(Parser, Debug)]
#[command(name = "graphcalc")]
#[command(about = "Plot y = f(x) curves on an 800x600 Cartesian canvas", long_about = None)]
struct Args {
    /// Pixel coordinates of the graph origin, e.g. 400,300 (prompted when omitted)
    #[arg(long, value_parser = parse_origin, allow_hyphen_values = true)]
    origin: Option<(f64, f64)>,

    /// Pixels per graph unit (prompted when omitted)
    #[arg(long, allow_negative_numbers = true)]
    ratio: Option<i64>,

    /// Expression to draw; repeat for several curves. Skips the interactive loop.
    #[arg(short = 'e', long = "expr")]
    exprs: Vec<String>,

    /// PNG written after every drawn expression
    #[arg(short, long, default_value = "target/out/graph.png")]
    output: PathBuf,

    /// TOML config (palette, colors, evaluation-failure policy)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a commented default config and exit
    #[arg(long)]
    print_config: bool,

    /// Do not render tick labels
    #[arg(long)]
    no_labels: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.print_config {
        print!("{}", GraphConfig::template());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    let options = SessionOptions::from_config(&config)?;
    let mut render = RenderOptions::from_config(&config);
    if args.no_labels {
        render.draw_labels = false;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let Some(origin) = resolve(args.origin, &mut input, &mut out, ORIGIN_PROMPT, parse_origin)? else {
        return interrupted(&mut out);
    };
    let Some(ratio) = resolve(args.ratio, &mut input, &mut out, RATIO_PROMPT, parse_ratio)? else {
        return interrupted(&mut out);
    };

    let mut plotter = Plotter::new(origin, ratio, options, &render, args.output.clone())?;

    if args.exprs.is_empty() {
        expression_loop(&mut input, &mut out, &mut io::stderr(), |src| plotter.draw(src).map(|_| ()))?;
    } else {
        for src in &args.exprs {
            if let Err(e) = plotter.draw(src) {
                let recoverable = e.downcast_ref::<graph_core::GraphError>().is_some_and(|g| g.is_recoverable());
                if !recoverable {
                    return Err(e);
                }
                eprintln!("Error: {e}");
            }
        }
    }

    println!("Wrote {}", plotter.output().display());
    Ok(())
}

/// Use the flag value when given, otherwise prompt; `None` on end of input.
fn resolve<T, R, W, P>(given: Option<T>, input: &mut R, out: &mut W, prompt: &str, parse: P) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    P: Fn(&str) -> Result<T, graph_core::GraphError>,
{
    if let Some(v) = given {
        return Ok(Some(v));
    }
    match prompt_line(input, out, prompt)? {
        Some(line) => Ok(Some(parse(&line)?)),
        None => Ok(None),
    }
}

fn interrupted<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{INTERRUPT_MESSAGE}")?;
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting graphcalc");
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_writer(io::stderr).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}
