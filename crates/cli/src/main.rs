mod config;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jiff::{Zoned, civil::Date};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uom::si::{
    length::millimeter,
    mass::kilogram,
    pressure::{megapascal, pound_force_per_square_inch},
    ratio::percent,
    volume::{cubic_meter, liter},
};
use vessel_design::{TankDesign, compute_design};
use vessel_report::{
    ANALYSIS_REPORT_FILE, AnalysisReport, DesignSummary, SAFETY_CHECKLIST_FILE, SUMMARY_FILE,
    SafetyChecklist,
};

use crate::config::DesignConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Horizontal storage tank sizing calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a tank design and print a summary
    Design(DesignArgs),
    /// Compute a tank design and write the analysis report and safety checklist
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
struct DesignArgs {
    /// TOML design configuration; defaults to the standard 10 000 L tank
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    design: DesignArgs,

    /// Directory the documents are written to
    #[arg(long, short, default_value = ".")]
    output: PathBuf,

    /// Also write a JSON summary of the design
    #[arg(long)]
    json: bool,

    /// Report date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<Date>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Design(args) => {
            let (_, design) = load_design(&args)?;
            print_summary(&design);
            Ok(())
        }
        Command::Report(args) => write_reports(&args),
    }
}

fn load_design(args: &DesignArgs) -> Result<(DesignConfig, TankDesign)> {
    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading design configuration");
            DesignConfig::load(path)?
        }
        None => DesignConfig::default(),
    };

    let params = config
        .to_parameters()
        .context("invalid design configuration")?;
    let design = compute_design(&params).context("failed to compute tank design")?;

    if !design.capacity.matches {
        warn!(
            deviation_percent = design.capacity.deviation.get::<percent>(),
            "verified volume is outside the capacity tolerance"
        );
    }
    if !design.heads_are_compliant() {
        warn!("dished-end geometry is outside SANS 10131 limits");
    }

    Ok((config, design))
}

fn write_reports(args: &ReportArgs) -> Result<()> {
    let (config, design) = load_design(&args.design)?;
    let date = args.date.unwrap_or_else(|| Zoned::now().date());
    let context = config.report_context(date);

    fs::create_dir_all(&args.output).with_context(|| {
        format!("failed to create output directory '{}'", args.output.display())
    })?;

    let mut documents = vec![
        (
            ANALYSIS_REPORT_FILE,
            AnalysisReport::new(&design, &context).to_string(),
        ),
        (
            SAFETY_CHECKLIST_FILE,
            SafetyChecklist::new(&design, &context).to_string(),
        ),
    ];
    if args.json {
        let json = DesignSummary::new(&design, &context)
            .to_json()
            .context("failed to serialise design summary")?;
        documents.push((SUMMARY_FILE, json));
    }

    for (name, content) in documents {
        let path = args.output.join(name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "document written");
    }

    Ok(())
}

fn print_summary(design: &TankDesign) {
    let p = &design.parameters;
    let cap = &design.capacity;

    println!("Tank design");
    println!(
        "  capacity          {:>10.0} L",
        p.target_capacity.get::<liter>()
    );
    println!("  diameter          {:>10.0} mm", p.diameter.get::<millimeter>());
    println!("  length            {:>10.0} mm", p.length.get::<millimeter>());
    println!(
        "  design pressure   {:>10.2} psig ({:.4} MPa)",
        p.design_pressure.get::<pound_force_per_square_inch>(),
        p.design_pressure.get::<megapascal>()
    );
    println!(
        "  t_calc            {:>10.3} mm",
        design.shell.calculated.get::<millimeter>()
    );
    println!(
        "  t_min             {:>10.3} mm",
        design.shell.required.get::<millimeter>()
    );
    println!(
        "  t_selected        {:>10.1} mm{}",
        design.shell.selected.get::<millimeter>(),
        if design.shell.governed_by_minimum {
            " (minimum governs)"
        } else {
            ""
        }
    );
    println!(
        "  verified volume   {:>10.3} m³ ({:+.2} %)",
        cap.verified_volume.get::<cubic_meter>(),
        cap.deviation.get::<percent>()
    );
    println!(
        "  capacity match    {:>10}",
        if cap.matches { "yes" } else { "no" }
    );
    println!(
        "  bund capacity     {:>10.3} m³",
        cap.bund_capacity.get::<cubic_meter>()
    );
    println!(
        "  empty weight      {:>10.0} kg",
        design.weights.empty.get::<kilogram>()
    );
    println!(
        "  operating weight  {:>10.0} kg",
        design.weights.operating.get::<kilogram>()
    );
    println!(
        "  test pressure     {:>10.4} MPa",
        design.hydrostatic_test_pressure.get::<megapascal>()
    );
}
