//! Givens-Layer Ansatz Demo
//!
//! Builds a particle-conserving variational ansatz, binds a parameter
//! vector and simulates the bound circuit.

use anyhow::Result;
use clap::Parser;
use fermiq_ir::QubitId;
use fermiq_sim::Simulator;
use fermiq_variational::{Ansatz, GivensLayerAnsatz};

use fermiq_demos::report::basis_index;
use fermiq_demos::{init_logging, print_header, print_result, print_section};

#[derive(Parser, Debug)]
#[command(name = "demo-ansatz")]
#[command(about = "Build and bind a Givens-layer variational ansatz")]
struct Args {
    /// Number of qubits (modes)
    #[arg(short = 'n', long, default_value = "4")]
    modes: u32,

    /// Number of brick layers
    #[arg(short, long, default_value = "2")]
    layers: usize,

    /// Parameter values; defaults to the ansatz's initial point
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    params: Option<Vec<f64>>,

    /// Occupied modes of the reference state
    #[arg(short, long, value_delimiter = ',', default_value = "0")]
    occupied: Vec<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let ansatz = Ansatz::new(GivensLayerAnsatz::new(QubitId::range(args.modes), args.layers))?;
    let values = args
        .params
        .clone()
        .unwrap_or_else(|| ansatz.default_initial_params());

    print_header("Givens-Layer Ansatz");

    print_section("Parameters");
    for (name, value) in ansatz.params().names().iter().zip(&values) {
        print_result(name, format!("{value:+.4}"));
    }

    print_section("Symbolic Circuit");
    for instruction in ansatz.circuit().instructions() {
        println!("  {instruction}");
    }

    let bound = ansatz.resolved_circuit(&values)?;
    let initial = basis_index(args.modes as usize, &args.occupied);
    let state = Simulator::new().simulate(&bound, initial)?;

    print_section("Output State");
    for (index, amp) in state.amplitudes().iter().enumerate() {
        if amp.norm_sqr() > 1e-12 {
            let label = format!("|{index:0width$b}⟩", width = args.modes as usize);
            print_result(&label, format!("{:+.4}{:+.4}i", amp.re, amp.im));
        }
    }

    Ok(())
}
