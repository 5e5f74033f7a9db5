//! Bogoliubov Transform Demo
//!
//! Synthesizes the Givens-rotation circuit of a fermionic mode
//! transformation and checks it by state-vector simulation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fermiq_ir::QubitId;
use fermiq_primitives::{BogoliubovTransform, SynthesisOptions};
use tracing::info;

use fermiq_demos::matrices::MatrixKind;
use fermiq_demos::report::{SynthesisReport, basis_index};
use fermiq_demos::{
    init_logging, print_failure, print_header, print_result, print_section, print_success,
};

#[derive(Parser, Debug)]
#[command(name = "demo-bogoliubov")]
#[command(about = "Synthesize the circuit of a Bogoliubov transformation")]
struct Args {
    /// Number of fermionic modes
    #[arg(short = 'n', long, default_value = "4")]
    modes: usize,

    /// Transformation to synthesize
    #[arg(short, long, value_enum, default_value = "fourier")]
    matrix: MatrixKind,

    /// Occupied modes of the initial state, e.g. `--occupied 0,2`
    #[arg(short, long, value_delimiter = ',')]
    occupied: Option<Vec<usize>>,

    /// Seed for random matrices
    #[arg(short, long, default_value = "7")]
    seed: u64,

    /// Synthesis options file (YAML)
    #[arg(long, env = "FERMIQ_OPTIONS")]
    options: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_options(path: Option<&PathBuf>) -> Result<SynthesisOptions> {
    let Some(path) = path else {
        return Ok(SynthesisOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading options file {}", path.display()))?;
    let options = serde_yaml_ng::from_str(&text)
        .with_context(|| format!("parsing options file {}", path.display()))?;
    Ok(options)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = load_options(args.options.as_ref())?;
    let matrix = args.matrix.build(args.modes, args.seed);
    info!(
        modes = args.modes,
        matrix = ?args.matrix,
        tolerance = options.tolerance,
        "building transform"
    );

    let mut transform =
        BogoliubovTransform::new(QubitId::range(args.modes as u32), matrix).with_options(options);
    if let Some(occupied) = &args.occupied {
        transform = transform.with_initial_state(occupied.clone());
    }
    let circuit = transform.circuit()?;

    let initial = basis_index(args.modes, args.occupied.as_deref().unwrap_or(&[]));
    let mut report = SynthesisReport::new(
        format!("{:?}", args.matrix).to_lowercase(),
        args.occupied.clone(),
        circuit,
    );
    report.simulate_from(initial)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_header("Bogoliubov Transform Synthesis");

    print_section("Problem Setup");
    print_result("Modes", report.modes);
    print_result("Matrix", &report.matrix);
    print_result("Pairing terms", transform.is_pairing());
    match &report.occupied {
        Some(occupied) => print_result("Initial state", format!("{occupied:?} (|{initial}⟩)")),
        None => print_result("Initial state", "any (general circuit)"),
    }
    print_result("Tolerance", options.tolerance);

    print_section("Circuit");
    for instruction in report.circuit.instructions() {
        println!("  {instruction}");
    }

    print_section("Results");
    print_result("Gates", report.circuit.len());
    print_result("Depth", report.depth);
    for (name, count) in &report.gate_counts {
        print_result(name, count);
    }

    let norm = report.output_norm.unwrap_or_default();
    if (norm - 1.0).abs() < 1e-9 {
        print_success("Simulated output state is normalized");
    } else {
        print_failure(&format!("Simulated output norm {norm:.3e} deviates from 1"));
    }

    Ok(())
}
