use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use fcfs_disk_scheduler::export::{to_json, to_json_array, write_steps_csv};
use fcfs_disk_scheduler::loader::input::{InputAdapter, TextInput, load_scenarios};
use fcfs_disk_scheduler::render::chart::{ChartRenderer, SvgChart, TextChart};
use fcfs_disk_scheduler::{ScheduleRun, logger, run_all};

#[derive(Parser, Debug)]
#[command(name = "fcfs", about = "First-Come-First-Served disk scheduling: total head movement and movement chart", long_about = None)]
struct Args {
    /// Initial head position (cylinder)
    #[arg(long, allow_hyphen_values = true)]
    head: Option<String>,

    /// Comma separated cylinder requests, serviced in the given order, e.g. "98,183,37"
    #[arg(long, allow_hyphen_values = true)]
    requests: Option<String>,

    /// Disk size in cylinders; enables the 0..size range check
    #[arg(long)]
    disk_size: Option<String>,

    /// JSON scenario file; each scenario is scheduled independently
    #[arg(long, conflicts_with_all = ["head", "requests", "disk_size"])]
    scenarios: Option<PathBuf>,

    /// Write the movement chart as SVG (scenario runs get the scenario index appended)
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the per-step seek breakdown as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Do not print the terminal chart
    #[arg(long)]
    no_chart: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// `out.svg` for a single run, `out-2.svg` for the second scenario.
fn numbered_path(base: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }

    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let file_name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, index + 1, ext),
        None => format!("{}-{}", stem, index + 1),
    };
    base.with_file_name(file_name)
}

fn report(run: &ScheduleRun, index: usize, total: usize, args: &Args, svg_chart: &mut SvgChart, text_chart: &mut TextChart) -> anyhow::Result<()> {
    if !args.json {
        println!("{}", format!("== {} ==", run.name).bold());
        println!("Sequence: {}", run.result.path);
        let summary = run.summary().to_string();
        let (headline, details) = summary.split_once('\n').unwrap_or((summary.as_str(), ""));
        println!("{}", headline.green().bold());
        println!("{}", details);

        if !args.no_chart {
            text_chart.render(&run.result.path)?;
            print!("{}", text_chart);
        }
    }

    if let Some(svg) = &args.svg {
        let target = numbered_path(svg, index, total);
        svg_chart.render(&run.result.path)?;
        svg_chart.save(&target).with_context(|| format!("writing chart to '{}'", target.display()))?;
    }

    if let Some(csv) = &args.csv {
        let target = numbered_path(csv, index, total);
        let file = File::create(&target).with_context(|| format!("creating '{}'", target.display()))?;
        write_steps_csv(&run.result, file)?;
        log::info!("Seek steps written to '{}'.", target.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose.then_some(LevelFilter::Debug));

    let adapters: Vec<Box<dyn InputAdapter>> = match &args.scenarios {
        Some(path) => load_scenarios(path)?.into_iter().map(|s| Box::new(s) as Box<dyn InputAdapter>).collect(),
        None => vec![Box::new(TextInput::new(args.head.as_deref(), args.requests.as_deref(), args.disk_size.as_deref()))],
    };

    let mut svg_chart = SvgChart::default();
    let mut text_chart = TextChart::default();
    let total = adapters.len();
    let runs = run_all(&adapters);
    let mut completed: Vec<&ScheduleRun> = Vec::new();

    for (index, (adapter, run)) in adapters.iter().zip(&runs).enumerate() {
        match run {
            Ok(run) => {
                report(run, index, total, &args, &mut svg_chart, &mut text_chart)?;
                completed.push(run);
            }
            Err(e) => eprintln!("{} {}: {}", "error:".red().bold(), adapter.name(), e),
        }
    }

    if args.json {
        match completed.as_slice() {
            [run] if total == 1 => println!("{}", to_json(&run.result, run.input.disk_size)?),
            _ => println!("{}", to_json_array(&completed)?),
        }
    }

    let failures = total - completed.len();
    if failures > 0 {
        bail!("{} of {} inputs were rejected", failures, total);
    }

    Ok(())
}
