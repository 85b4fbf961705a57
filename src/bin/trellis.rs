use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use trellis::{ElementTree, Rect, Size, SizeConstraint, TreeDocument};

#[derive(Parser, Debug)]
#[command(name = "trellis", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure the root of a tree document and print its size as JSON.
    Measure(MeasureArgs),
    /// Lay out a tree document and write the layout snapshot as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Input tree document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Maximum width; unbounded when omitted.
    #[arg(long)]
    width: Option<f64>,

    /// Maximum height; unbounded when omitted.
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input tree document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Root width; measured when omitted.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Root height; measured when omitted.
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Measure(args) => cmd_measure(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<(ElementTree, trellis::Environment)> {
    let doc = TreeDocument::from_path(path)?;
    let root = doc
        .into_element()
        .with_context(|| format!("build tree from '{}'", path.display()))?;
    Ok((ElementTree::from_shared(root), doc.environment()))
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let (tree, env) = load(&args.in_path)?;
    let bounds = Size::new(
        args.width.unwrap_or(f64::INFINITY),
        args.height.unwrap_or(f64::INFINITY),
    );
    let size = tree.measure(SizeConstraint::from_size(bounds), &env);
    let json = serde_json::json!({ "width": size.width, "height": size.height });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (tree, env) = load(&args.in_path)?;
    let size = match (args.width, args.height) {
        (Some(w), Some(h)) => Size::new(w, h),
        _ => tree.measure(SizeConstraint::UNCONSTRAINED, &env),
    };
    let snapshot = tree
        .layout(Rect::from_origin_size((0.0, 0.0), size), &env)
        .to_json_pretty()?;

    let Some(out) = args.out else {
        println!("{snapshot}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, snapshot).with_context(|| format!("write snapshot '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
