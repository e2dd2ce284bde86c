use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use vp_app::{
    AppError, AppResult, RunOverrides, RunProgressEvent, RunRequest, RunTimingSummary, SeriesKind,
    project_service, query, run_service,
};

#[derive(Parser)]
#[command(name = "vp-cli")]
#[command(about = "VaporPlume CLI - isentropic release of shocked vapor plumes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a run configuration file
    Validate {
        /// Path to the run YAML (or JSON) file
        config_path: PathBuf,
    },
    /// Print a starter run configuration
    Template,
    /// Locate the shock state on the Hugoniot without running the release
    Shock {
        /// Path to the run YAML (or JSON) file
        config_path: PathBuf,
        /// Target specific entropy, J/(kg·K)
        #[arg(long)]
        entropy: Option<f64>,
    },
    /// Run the full release pipeline
    Run {
        /// Path to the run YAML (or JSON) file
        config_path: PathBuf,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Run and write one series to stdout
    Export {
        /// Path to the run YAML (or JSON) file
        config_path: PathBuf,
        /// Series name (p-up, p-up-raw, p-rho, p-t, p-time, t-time, rho-time, up-time,
        /// r-time, hug-p-up, hug-p-rho, hug-p-t)
        series: String,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

#[derive(clap::Args)]
struct OverrideArgs {
    /// Target specific entropy, J/(kg·K)
    #[arg(long)]
    entropy: Option<f64>,
    /// Initial plume radius, km
    #[arg(long)]
    radius_km: Option<f64>,
    /// Triple-point pressure, Pa
    #[arg(long)]
    triple_point_pa: Option<f64>,
}

impl From<OverrideArgs> for RunOverrides {
    fn from(args: OverrideArgs) -> Self {
        RunOverrides {
            target_entropy: args.entropy,
            initial_radius_km: args.radius_km,
            triple_point_pressure_pa: args.triple_point_pa,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Template => cmd_template(),
        Commands::Shock {
            config_path,
            entropy,
        } => cmd_shock(
            &config_path,
            RunOverrides {
                target_entropy: entropy,
                ..RunOverrides::default()
            },
        ),
        Commands::Run {
            config_path,
            overrides,
        } => cmd_run(&config_path, overrides.into()),
        Commands::Export {
            config_path,
            series,
            format,
            overrides,
        } => cmd_export(&config_path, &series, format, overrides.into()),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating run configuration: {}", config_path.display());
    let config = project_service::load_config(config_path)?;
    let material = project_service::load_material(config_path, &config)?;
    println!("✓ Configuration is valid");
    println!(
        "  Isentrope table: {} entropies x {} densities",
        material.isentrope.rows(),
        material.isentrope.columns()
    );
    println!("  Hugoniot points: {}", material.hugoniot.len());
    Ok(())
}

fn cmd_template() -> AppResult<()> {
    let yaml = vp_project::to_yaml_string(&vp_project::RunConfig::template())
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    print!("{}", yaml);
    Ok(())
}

fn cmd_shock(config_path: &Path, overrides: RunOverrides) -> AppResult<()> {
    let (config, _material, shock) = run_service::locate(&RunRequest {
        config_path,
        overrides,
    })?;

    println!("Shock state for run: {}", config.name);
    println!("{}", shock.summary);
    println!("  Isentrope row:  {}", shock.entropy_row);
    println!("  Hugoniot index: {}", shock.hugoniot_index);
    println!("  Peak column:    {}", shock.peak_index);
    Ok(())
}

fn cmd_run(config_path: &Path, overrides: RunOverrides) -> AppResult<()> {
    let request = RunRequest {
        config_path,
        overrides,
    };

    let mut last_emit = Instant::now();
    let mut last_stage = String::new();
    let response = run_service::execute_with_progress(
        &request,
        Some(&mut |event| {
            let stage_key = format!("{:?}", event.stage);
            let emit_now = stage_key != last_stage || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                last_stage = stage_key;
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Release completed: {}", response.config.name);
    println!("{}", response.run.shock.summary);

    let summary = query::get_run_summary(&response);
    println!("\nRelease:");
    println!(
        "  Isentrope row {}, peak column {}, triple-point column {}",
        summary.entropy_row, summary.peak_index, summary.triple_point_index
    );
    let repair = &response.run.repair;
    if let (Some(lower), Some(upper), Some(level)) = (repair.lower, repair.upper, repair.level_km_s)
    {
        println!(
            "  Flattened jump between columns {} and {} to {:.4} km/s",
            lower, upper, level
        );
    }
    println!("  Final velocity:  {:.4} km/s", summary.final_velocity_km_s);
    println!("  Expansion steps: {}", summary.steps);
    println!("  Final radius:    {:.4} km", summary.final_radius_km);
    println!("  Time to triple point: {:.4} s", summary.total_time_s);

    print_timing_summary(&response.timing);
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    let spinner = ['|', '/', '-', '\\'];
    let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
    print!(
        "\r{} {}  elapsed={:.3}s",
        spinner[spin_idx],
        event.stage.label(),
        event.elapsed_wall_s
    );
    let _ = io::stdout().flush();
}

fn print_timing_summary(timing: &RunTimingSummary) {
    let total = timing.total_time_s.max(1.0e-12);
    let rows = [
        ("Load:      ", timing.load_time_s),
        ("Locate:    ", timing.locate_time_s),
        ("Solve:     ", timing.solve_time_s),
        ("Repair:    ", timing.repair_time_s),
        ("Kinematics:", timing.kinematics_time_s),
    ];

    println!("\nTiming summary:");
    for (label, seconds) in rows {
        println!(
            "  {} {:.4}s ({:.1}%)",
            label,
            seconds,
            100.0 * seconds / total
        );
    }
    println!("  Total:      {:.4}s", timing.total_time_s);
}

fn cmd_export(
    config_path: &Path,
    series: &str,
    format: Format,
    overrides: RunOverrides,
) -> AppResult<()> {
    let kind: SeriesKind = series.parse()?;
    let response = run_service::execute(&RunRequest {
        config_path,
        overrides,
    })?;
    let data = query::extract_series(&response, kind);

    let out = match format {
        Format::Csv => {
            let mut csv = format!("{},{}\n", data.x_label, data.y_label);
            for (x, y) in &data.points {
                csv.push_str(&format!("{},{}\n", x, y));
            }
            csv
        }
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&data)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    tracing::debug!(series = %kind, points = data.points.len(), "exported series");
    Ok(())
}
