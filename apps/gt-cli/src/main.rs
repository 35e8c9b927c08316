use clap::{Args, Parser, Subcommand, ValueEnum};
use gt_core::GtResult;
use gt_core::units::{k, m, mps, pa};
use gt_eval::{
    EvalError, EvalResult, FieldPoint, SweepDefinition, SweepType, SweptQuantity,
    TransportConfig, TransportSetup, execute_sweep,
};
use gt_mixture::filter_catalog;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "gt-cli")]
#[command(about = "GasTrans CLI - Gas-mixture transport properties per evaluation point", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in gas presets
    Species {
        /// Case-insensitive filter on id, name or alias
        filter: Option<String>,
    },
    /// Validate a transport configuration file
    Validate {
        /// Path to the configuration YAML file
        config_path: PathBuf,
    },
    /// Evaluate every configured output at one point
    Eval {
        /// Path to the configuration YAML file
        config_path: PathBuf,
        #[command(flatten)]
        point: PointArgs,
    },
    /// Sweep one configured output over temperature, pressure or velocity
    Sweep {
        /// Path to the configuration YAML file
        config_path: PathBuf,
        /// Position of the output in the configuration's output list
        #[arg(long, default_value_t = 0)]
        output: usize,
        /// Quantity to sweep
        #[arg(long, value_enum)]
        quantity: SweepQuantityArg,
        /// First value (SI units)
        #[arg(long)]
        start: f64,
        /// Last value (SI units)
        #[arg(long)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Space points logarithmically
        #[arg(long)]
        log: bool,
        #[command(flatten)]
        point: PointArgs,
    },
}

#[derive(Args)]
struct PointArgs {
    /// Species concentrations in mol/L, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    conc: Vec<f64>,
    /// Pressure in Pa
    #[arg(long)]
    pressure: f64,
    /// Temperature in K
    #[arg(long)]
    temperature: f64,
    /// Velocity components vx,vy,vz in m/s
    #[arg(long, value_delimiter = ',')]
    velocity: Option<Vec<f64>>,
    /// Characteristic length in m
    #[arg(long, default_value_t = 0.0)]
    char_length: f64,
}

impl PointArgs {
    fn field_point(&self) -> EvalResult<FieldPoint<'_>> {
        let mut point = FieldPoint::new(&self.conc, pa(self.pressure), k(self.temperature))
            .with_char_length(m(self.char_length));
        if let Some(v) = &self.velocity {
            let [vx, vy, vz] = v.as_slice() else {
                return Err(EvalError::Configuration {
                    what: format!("velocity needs 3 components, got {}", v.len()),
                });
            };
            point = point.with_velocity(mps(*vx), mps(*vy), mps(*vz));
        }
        Ok(point)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepQuantityArg {
    Temperature,
    Pressure,
    Velocity,
}

impl From<SweepQuantityArg> for SweptQuantity {
    fn from(arg: SweepQuantityArg) -> Self {
        match arg {
            SweepQuantityArg::Temperature => SweptQuantity::Temperature,
            SweepQuantityArg::Pressure => SweptQuantity::Pressure,
            SweepQuantityArg::Velocity => SweptQuantity::VelocityMagnitude,
        }
    }
}

fn main() -> GtResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Species { filter } => cmd_species(filter.as_deref().unwrap_or("")),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Eval { config_path, point } => cmd_eval(&config_path, &point),
        Commands::Sweep {
            config_path,
            output,
            quantity,
            start,
            end,
            points,
            log,
            point,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            SweepDefinition::new(quantity.into(), start, end, points, sweep_type)
                .and_then(|sweep| cmd_sweep(&config_path, output, &sweep, &point))
        }
    };
    Ok(result?)
}

fn load_setup(config_path: &Path) -> EvalResult<TransportSetup> {
    let setup = TransportConfig::load(config_path)?.build()?;
    info!(path = %config_path.display(), "configuration loaded");
    Ok(setup)
}

fn cmd_species(filter: &str) -> EvalResult<()> {
    let entries = filter_catalog(filter);
    if entries.is_empty() {
        println!("No presets match '{}'", filter);
        return Ok(());
    }

    println!("{:<6} {:<18} {:>10} {:>10}", "id", "name", "MW", "mu0");
    for entry in entries {
        let c = entry.gas.constants();
        println!(
            "{:<6} {:<18} {:>10.3} {:>10.3e}",
            entry.canonical_id(),
            entry.display_name,
            c.molecular_weight,
            c.sutherland_viscosity
        );
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> EvalResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let setup = load_setup(config_path)?;
    println!("✓ Configuration is valid");
    println!("  Species:");
    for (i, s) in setup.gas.model().species().iter().enumerate() {
        println!("    [{}] {} (MW {:.3})", i, s.name, s.molecular_weight);
    }
    println!("  Outputs: {}", setup.labels().join(", "));
    Ok(())
}

fn cmd_eval(config_path: &Path, args: &PointArgs) -> EvalResult<()> {
    let mut setup = load_setup(config_path)?;
    let point = args.field_point()?;

    let props = setup.gas.evaluate_point(&point)?;
    println!("{}", props.summary());
    if props.is_degenerate() {
        println!("  (zero total concentration)");
    }

    for output in &setup.outputs {
        let value = output.evaluate(&mut setup.gas, &point)?;
        println!("  {:<24} {:>14.6e}", output.label(), value);
    }
    Ok(())
}

fn cmd_sweep(
    config_path: &Path,
    output: usize,
    sweep: &SweepDefinition,
    args: &PointArgs,
) -> EvalResult<()> {
    let setup = load_setup(config_path)?;
    let base = args.field_point()?;
    let evaluator = setup
        .outputs
        .get(output)
        .ok_or_else(|| EvalError::Configuration {
            what: format!(
                "output {} out of range ({} outputs configured)",
                output,
                setup.outputs.len()
            ),
        })?;

    let result = execute_sweep(&**evaluator, &setup.gas, &base, sweep);

    println!("{:>14} {:>14}", result.quantity.to_string(), result.label);
    for (x, y) in result.independent_values.iter().zip(&result.values) {
        match y {
            Some(y) => println!("{:>14.6e} {:>14.6e}", x, y),
            None => println!("{:>14.6e} {:>14}", x, "failed"),
        }
    }

    if let Some(err) = &result.first_error {
        println!(
            "✗ {} of {} points failed: {}",
            result.num_failed,
            result.values.len(),
            err
        );
    } else {
        println!("✓ {} points evaluated", result.num_successful);
    }
    Ok(())
}
