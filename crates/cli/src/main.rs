use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use stepgeom::api::{
    draw_points, draw_segments, GiftWrap, InputReplay, PointsCfg, QuickHull, SegmentsCfg,
    SweepCfg, TrapezoidSweep,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod trace;

use provenance::Payload;
use trace::{record, Trace, Traced};

#[derive(Parser)]
#[command(name = "stepgeom")]
#[command(about = "Headless driver for the steppable geometry engines")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Step an engine over an input file and write its trace as JSON
    Run(RunArgs),
    /// Write a seeded random input file
    Generate(GenerateArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    Quickhull,
    GiftWrap,
    Trapezoid,
}

impl Algo {
    fn name(self) -> &'static str {
        match self {
            Algo::Quickhull => "quickhull",
            Algo::GiftWrap => "gift-wrap",
            Algo::Trapezoid => "trapezoid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Points,
    Segments,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    #[arg(long, value_enum)]
    algo: Algo,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Give up after this many steps
    #[arg(long)]
    max_steps: Option<usize>,
    /// Record every k-th snapshot (the final one is always kept)
    #[arg(long, default_value_t = 1)]
    every: usize,
    /// Synthetic boundary margin for the trapezoid sweep
    #[arg(long)]
    margin: Option<f64>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    #[arg(long, value_enum)]
    kind: Kind,
    /// Points, or segments per color
    #[arg(long)]
    count: usize,
    #[arg(long)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: PathBuf,
}

/// Input file layout; every buffer is optional.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct InputFile {
    points: Vec<f64>,
    blue: Vec<f64>,
    red: Vec<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args).map(|_| ()),
        Action::Generate(args) => generate(&args),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<Trace> {
    tracing::info!(algo = args.algo.name(), input = %args.input.display(), "run");
    let raw =
        fs::read(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let input: InputFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let trace = match args.algo {
        Algo::Quickhull => drive(QuickHull::new(&input.points), args),
        Algo::GiftWrap => drive(GiftWrap::new(&input.points), args),
        Algo::Trapezoid => {
            let mut cfg = SweepCfg::default();
            if let Some(m) = args.margin {
                cfg.boundary_margin = m;
            }
            drive(TrapezoidSweep::with_cfg(&input.blue, &input.red, cfg), args)
        }
    };
    tracing::info!(steps = trace.steps, terminal = trace.terminal, "engine stopped");

    write_json(&args.out, &trace.to_json(args.algo.name()))?;
    let params = json!({
        "algo": args.algo.name(),
        "input": args.input.to_string_lossy(),
        "max_steps": args.max_steps,
        "every": args.every,
        "margin": args.margin,
        "steps": trace.steps
    });
    provenance::write_sidecar(&args.out, Payload::new("run", params))?;

    if !trace.terminal {
        bail!(
            "step budget of {} exhausted before {} finished",
            trace.steps,
            args.algo.name()
        );
    }
    Ok(trace)
}

fn drive<E: Traced>(mut engine: E, args: &RunArgs) -> Trace {
    record(&mut engine, args.every, args.max_steps)
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let tok = InputReplay {
        seed: args.seed,
        index: args.index,
    };
    let file = match args.kind {
        Kind::Points => InputFile {
            points: draw_points(
                PointsCfg {
                    count: args.count,
                    ..PointsCfg::default()
                },
                tok,
            ),
            ..InputFile::default()
        },
        Kind::Segments => {
            let segs = draw_segments(
                SegmentsCfg {
                    blue: args.count,
                    red: args.count,
                    ..SegmentsCfg::default()
                },
                tok,
            );
            InputFile {
                blue: segs.blue,
                red: segs.red,
                ..InputFile::default()
            }
        }
    };
    tracing::info!(kind = ?args.kind, count = args.count, seed = args.seed, "generate");
    write_json(&args.out, &file)?;
    let params = json!({
        "kind": format!("{:?}", args.kind).to_lowercase(),
        "count": args.count,
        "seed": args.seed,
        "index": args.index
    });
    provenance::write_sidecar(&args.out, Payload::new("generate", params))?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::block())?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
