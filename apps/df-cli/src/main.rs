use clap::{Parser, Subcommand};
use df_app::{
    AppResult, RunOptions, ensure_drain_run, ensure_sweep_run, extract_series, list_runs,
    load_run, load_scenario, run_summary, scenario_summary, validate_scenario,
};
use df_results::RunType;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(about = "Drainflow CLI - Reservoir drain-time simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Run a simulation
    #[command(subcommand)]
    Run(RunCommands),
    /// List cached runs for a scenario
    Runs {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Show details of a cached run
    ShowRun {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Export time series data from a run
    ExportSeries {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Variable name (height, velocity, friction_factor, reynolds)
        variable: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum RunCommands {
    /// Run a single drain simulation for one tube length
    Drain {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Tube length in meters
        #[arg(long)]
        length: f64,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// Run the sweep over the scenario's candidate tube lengths
    Sweep {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run(run_cmd) => match run_cmd {
            RunCommands::Drain {
                scenario_path,
                length,
                no_cache,
            } => cmd_run_drain(&scenario_path, length, !no_cache),
            RunCommands::Sweep {
                scenario_path,
                no_cache,
            } => cmd_run_sweep(&scenario_path, !no_cache),
        },
        Commands::Runs { scenario_path } => cmd_runs(&scenario_path),
        Commands::ShowRun {
            scenario_path,
            run_id,
        } => cmd_show_run(&scenario_path, &run_id),
        Commands::ExportSeries {
            scenario_path,
            run_id,
            variable,
            output,
        } => cmd_export_series(&scenario_path, &run_id, &variable, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    validate_scenario(&scenario)?;

    let summary = scenario_summary(&scenario);
    println!("✓ Scenario is valid");
    println!("  Name: {}", summary.name);
    println!("  Tube diameter: {:.4} m", summary.tube_diameter_m);
    println!(
        "  Drain: {:.3} m -> {:.3} m",
        summary.initial_height_m, summary.final_height_m
    );
    println!("  Sweep lengths: {}", summary.sweep_length_count);
    Ok(())
}

fn cmd_run_drain(scenario_path: &Path, length: f64, use_cache: bool) -> AppResult<()> {
    println!("Running drain simulation for tube length {:.3} m", length);

    let options = RunOptions {
        use_cache,
        ..RunOptions::default()
    };
    let response = ensure_drain_run(scenario_path, length, &options)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Simulation completed: {}", response.run_id);
    }

    let (_manifest, samples, _sweep) = load_run(scenario_path, &response.run_id)?;
    let summary = run_summary(&samples);
    println!("  Samples: {}", summary.sample_count);
    println!("  Drain time: {:.2} s", summary.time_range.1);
    if let Some(height) = summary.final_height_m {
        println!("  Final height: {:.4} m", height);
    }
    Ok(())
}

fn cmd_run_sweep(scenario_path: &Path, use_cache: bool) -> AppResult<()> {
    println!("Running tube-length sweep");

    let options = RunOptions {
        use_cache,
        ..RunOptions::default()
    };
    let response = ensure_sweep_run(scenario_path, &options)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Sweep completed: {}", response.run_id);
    }

    let (_manifest, _samples, sweep) = load_run(scenario_path, &response.run_id)?;
    if let Some(sweep) = sweep {
        println!("  Lengths swept: {}", sweep.entries.len());
        for entry in &sweep.entries {
            match (entry.total_time_s, &entry.error) {
                (Some(time), _) => {
                    println!("    L = {:.3} m: {:.2} s", entry.tube_length_m, time)
                }
                (None, Some(error)) => {
                    println!("    L = {:.3} m: failed ({error})", entry.tube_length_m)
                }
                (None, None) => println!("    L = {:.3} m: no result", entry.tube_length_m),
            }
        }
        if let (Some(length), Some(time)) =
            (sweep.optimal_tube_length_m, sweep.optimal_total_time_s)
        {
            println!("  Optimal length: {:.3} m ({:.2} s)", length, time);
        }
    }
    Ok(())
}

fn cmd_runs(scenario_path: &Path) -> AppResult<()> {
    let runs = list_runs(scenario_path)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for manifest in runs {
            let kind = match &manifest.run_type {
                RunType::Drain { tube_length_m, .. } => {
                    format!("drain L={:.3} m", tube_length_m)
                }
                RunType::Sweep { lengths_m, .. } => format!("sweep ({} lengths)", lengths_m.len()),
            };
            println!("  {} ({}, {})", manifest.run_id, kind, manifest.timestamp);
        }
    }
    Ok(())
}

fn cmd_show_run(scenario_path: &Path, run_id: &str) -> AppResult<()> {
    println!("Loading run: {}", run_id);

    let (manifest, samples, sweep) = load_run(scenario_path, run_id)?;

    println!("\nRun Summary:");
    println!("  Scenario: {}", manifest.scenario_name);
    println!("  Timestamp: {}", manifest.timestamp);

    match manifest.run_type {
        RunType::Drain { tube_length_m, dt_s } => {
            println!("  Type: drain (L = {:.3} m, dt = {:.3} s)", tube_length_m, dt_s);
            let summary = run_summary(&samples);
            println!("  Samples: {}", summary.sample_count);
            println!(
                "  Time range: {:.3} - {:.3} s",
                summary.time_range.0, summary.time_range.1
            );
            if let Some(height) = summary.final_height_m {
                println!("  Final height: {:.4} m", height);
            }
        }
        RunType::Sweep { lengths_m, dt_s } => {
            println!(
                "  Type: sweep ({} lengths, dt = {:.3} s)",
                lengths_m.len(),
                dt_s
            );
            if let Some(sweep) = sweep {
                for entry in &sweep.entries {
                    match entry.total_time_s {
                        Some(time) => {
                            println!("    L = {:.3} m: {:.2} s", entry.tube_length_m, time)
                        }
                        None => println!("    L = {:.3} m: failed", entry.tube_length_m),
                    }
                }
            }
        }
    }
    Ok(())
}

fn cmd_export_series(
    scenario_path: &Path,
    run_id: &str,
    variable: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let (_manifest, samples, _sweep) = load_run(scenario_path, run_id)?;
    let series = extract_series(&samples, variable)?;

    // Build CSV
    let mut csv = format!("time_s,{}\n", variable);
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
