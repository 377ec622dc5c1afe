use clap::{Args, Parser, Subcommand, ValueEnum};
use ef_app::{
    AppError, AppResult, ExportFormat, InitialConditionDef, Scenario, load_scenario, render,
    run_scenario,
};
use ef_core::Compartment;
use ef_model::{ModelInputs, effective_reproduction_number, endemic_equilibrium};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ef-cli")]
#[command(about = "epiflow CLI - deterministic SEIRS epidemic simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and export the percentage series
    Solve {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the derived rate constants
    Rates {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Run a simulation and print peak, final state and diagnostics
    Summary {
        #[command(flatten)]
        input: InputArgs,
        /// Compartment whose peak is reported in addition to the infectious one
        #[arg(long, default_value = "infectious")]
        peak_of: Compartment,
    },
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// Inputs come from a scenario file or from individual flags.
///
/// The optional model flags override the values of a scenario file.
#[derive(Args)]
struct InputArgs {
    /// Scenario YAML or JSON file
    #[arg(long, conflicts_with_all = ["s0", "r0", "latent", "infectious", "days"])]
    scenario: Option<PathBuf>,
    /// Initial susceptible proportion [0, 1]
    #[arg(long)]
    s0: Option<f64>,
    /// Basic reproduction number
    #[arg(long)]
    r0: Option<f64>,
    /// Latent period in days
    #[arg(long)]
    latent: Option<f64>,
    /// Infectious period in days
    #[arg(long)]
    infectious: Option<f64>,
    /// Number of simulated days
    #[arg(long)]
    days: Option<usize>,
    /// Days until disease-induced death (0 disables disease mortality)
    #[arg(long)]
    death_onset: Option<f64>,
    /// Immunity duration in years
    #[arg(long)]
    immunity: Option<f64>,
    /// Life expectancy in years
    #[arg(long)]
    life_expectancy: Option<f64>,
    /// Fraction of births vaccinated [0, 1]
    #[arg(long)]
    vaccination: Option<f64>,
    /// Fail instead of clamping when vaccination exceeds the initial susceptible share
    #[arg(long)]
    reject_negative_s0: bool,
}

impl InputArgs {
    fn scenario(&self) -> AppResult<Scenario> {
        let mut scenario = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => {
                let missing = |name: &str| AppError::InvalidInput(format!("missing --{}", name));
                let inputs = ModelInputs::new(
                    self.s0.ok_or_else(|| missing("s0"))?,
                    self.r0.ok_or_else(|| missing("r0"))?,
                    self.latent.ok_or_else(|| missing("latent"))?,
                    self.infectious.ok_or_else(|| missing("infectious"))?,
                    self.days.ok_or_else(|| missing("days"))?,
                );
                Scenario::new("command-line", inputs)
            }
        };
        scenario.inputs = self.apply_overrides(scenario.inputs);
        if self.reject_negative_s0 {
            scenario.options.initial_condition = InitialConditionDef::Reject;
        }
        scenario.validate()?;
        Ok(scenario)
    }

    /// Replace the optional model inputs given on the command line.
    fn apply_overrides(&self, mut inputs: ModelInputs) -> ModelInputs {
        if let Some(v) = self.death_onset {
            inputs = inputs.with_death_onset_days(v);
        }
        if let Some(v) = self.immunity {
            inputs = inputs.with_immunity_duration_years(v);
        }
        if let Some(v) = self.life_expectancy {
            inputs = inputs.with_life_expectancy_years(v);
        }
        if let Some(v) = self.vaccination {
            inputs = inputs.with_vaccination_rate(v);
        }
        inputs
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so exported series can be piped from stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            format,
            output,
        } => cmd_solve(&input, format.into(), output.as_deref()),
        Commands::Rates { input } => cmd_rates(&input),
        Commands::Summary { input, peak_of } => cmd_summary(&input, peak_of),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
    }
}

fn cmd_solve(input: &InputArgs, format: ExportFormat, output: Option<&Path>) -> AppResult<()> {
    let scenario = input.scenario()?;
    let response = run_scenario(&scenario)?;
    let text = render(&response.output, format)?;

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!(
            "✓ Exported {} points per series to {}",
            response.output.len(),
            path.display()
        );
    } else {
        print!("{}", text);
    }

    if response.clamp.any() {
        eprintln!(
            "note: {} step(s) clamped into [0, 1] (max excursion {:.3e})",
            response.clamp.steps_clamped, response.clamp.max_excursion
        );
    }
    info!(solve_time_s = response.solve_time_s, "solve command finished");
    Ok(())
}

fn cmd_rates(input: &InputArgs) -> AppResult<()> {
    let scenario = input.scenario()?;
    let inputs = &scenario.inputs;
    let rates = ef_model::derive(inputs)?;

    println!("Rate constants (per day):");
    println!("  alpha (disease death): {:.6e}", rates.alpha);
    println!("  gamma (recovery):      {:.6e}", rates.gamma);
    println!("  omega (waning):        {:.6e}", rates.omega);
    println!("  mu    (birth/death):   {:.6e}", rates.mu);
    println!("  sigma (progression):   {:.6e}", rates.sigma);
    println!("  beta  (transmission):  {:.6e}", rates.beta);
    println!("\n  R0 (recovered):        {:.6}", rates.basic_reproduction_number());
    println!(
        "  R effective:           {:.6}",
        effective_reproduction_number(&rates, inputs.vaccination_rate)
    );
    match endemic_equilibrium(&rates, inputs.vaccination_rate) {
        Some(eq) => println!(
            "  Endemic equilibrium:   s={:.4} e={:.4} i={:.4} r={:.4}",
            eq.s, eq.e, eq.i, eq.r
        ),
        None => println!("  Endemic equilibrium:   none (disease dies out)"),
    }
    Ok(())
}

fn cmd_summary(input: &InputArgs, peak_of: Compartment) -> AppResult<()> {
    let scenario = input.scenario()?;
    println!("Running scenario: {}", scenario.name);
    let response = run_scenario(&scenario)?;
    let summary = &response.summary;

    println!("\nRun summary:");
    println!("  Days: {}", response.output.len().saturating_sub(1));
    println!(
        "  Infectious peak: {:.3}% on day {}",
        summary.peak_infectious * 100.0,
        summary.peak_infectious_day
    );
    if peak_of != Compartment::Infectious {
        let (day, value) = response
            .output
            .series(peak_of)
            .iter()
            .fold((0, f64::NEG_INFINITY), |best, &(d, v)| {
                if v > best.1 { (d, v) } else { best }
            });
        println!("  {} peak: {:.3}% on day {}", peak_of, value, day);
    }
    println!("\nFinal state (%):");
    for c in Compartment::ALL {
        println!("  {:<12} {:>8.4}", c.to_string(), summary.final_state.get(c) * 100.0);
    }
    println!(
        "\n  Final derivative norm: {:.3e} ({})",
        summary.final_derivative_norm,
        if summary.reached_equilibrium {
            "settled"
        } else {
            "still moving"
        }
    );
    match (summary.endemic, summary.distance_to_endemic) {
        (Some(eq), Some(dist)) => {
            println!(
                "  Endemic equilibrium (%): s={:.4} e={:.4} i={:.4} r={:.4}",
                eq.s * 100.0,
                eq.e * 100.0,
                eq.i * 100.0,
                eq.r * 100.0
            );
            println!("  Distance to equilibrium: {:.3e}", dist);
        }
        _ => println!("  No endemic equilibrium (disease dies out)"),
    }

    let clamp = &response.clamp;
    println!("\nClamping:");
    if clamp.any() {
        if clamp.initial_clamped {
            println!("  Initial susceptible clamped to 0");
        }
        println!("  Steps clamped: {}", clamp.steps_clamped);
        for c in Compartment::ALL {
            let n = clamp.count(c);
            if n > 0 {
                println!("    {}: {}", c, n);
            }
        }
        println!("  Max excursion: {:.3e}", clamp.max_excursion);
    } else {
        println!("  none");
    }
    println!("\n  Solve: {:.3}s", response.solve_time_s);
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}
