#![deny(unsafe_code)]

//! Siegel CLI: evaluate θ, Z and ζ from the command line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use siegel_config::AppConfig;
use siegel_core::{
    Complex64, GridCell, GridSource, GridSpec, RiemannSiegel, SweepSummary, build_info,
};
use tokio::task::JoinSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Riemann–Siegel evaluation of the Riemann zeta function.
#[derive(Parser)]
#[command(name = "siegel", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "siegel.toml", global = true)]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Enable the near-integer jitter regardless of the config file.
    #[arg(long, global = true)]
    jitter: bool,

    /// Rotate Z(t) by e^(−iθ) on the critical line regardless of the config file.
    #[arg(long, global = true)]
    conjugate_phase: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Riemann–Siegel theta θ(t).
    Theta {
        #[arg(allow_hyphen_values = true)]
        t: f64,
    },

    /// Hardy Z-function Z(t).
    Z {
        t: f64,

        /// Main-sum length (default ⌊√(t/2π)⌋).
        #[arg(long)]
        terms: Option<usize>,

        /// Also print the main-sum summands.
        #[arg(long)]
        show_terms: bool,
    },

    /// ζ(σ + it).
    Zeta {
        #[arg(allow_hyphen_values = true)]
        sigma: f64,

        #[arg(allow_hyphen_values = true)]
        t: f64,

        /// Main-sum length (default ⌊√(t/2π)⌋).
        #[arg(long)]
        terms: Option<usize>,
    },

    /// Compare against the reference evaluator along a vertical line.
    Compare {
        #[arg(long)]
        start: Option<f64>,

        #[arg(long)]
        end: Option<f64>,

        #[arg(long)]
        points: Option<usize>,

        #[arg(long, allow_hyphen_values = true)]
        sigma: Option<f64>,
    },

    /// Sample |ζ| and arg ζ over the configured rectangle as CSV.
    Grid {
        #[arg(long, value_enum, default_value_t = SourceArg::Reference)]
        source: SourceArg,

        /// Points per axis, overriding `grid.resolution`.
        #[arg(long)]
        resolution: Option<usize>,
    },

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Reference,
    RiemannSiegel,
}

impl From<SourceArg> for GridSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Reference => GridSource::Reference,
            SourceArg::RiemannSiegel => GridSource::RiemannSiegel,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, from_file) = load_config(&cli.config).await?;
    init_tracing(cli.verbose, &config.logging.level);
    if !from_file {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }
    if cli.jitter {
        config.engine.near_integer_jitter = true;
    }
    if cli.conjugate_phase {
        config.engine.conjugate_phase = true;
    }

    tracing::debug!(build = %build_info::version_string(), "siegel starting");

    let engine = RiemannSiegel::from_config(&config)?;
    match cli.command {
        Commands::Theta { t } => cmd_theta(&engine, t, cli.json)?,
        Commands::Z {
            t,
            terms,
            show_terms,
        } => cmd_z(&engine, t, terms, show_terms, cli.json)?,
        Commands::Zeta { sigma, t, terms } => {
            cmd_zeta(&engine, Complex64::new(sigma, t), terms, cli.json)?
        }
        Commands::Compare {
            start,
            end,
            points,
            sigma,
        } => {
            let mut sweep = config.sweep.clone();
            sweep.t_start = start.unwrap_or(sweep.t_start);
            sweep.t_end = end.unwrap_or(sweep.t_end);
            sweep.points = points.unwrap_or(sweep.points);
            sweep.sigma = sigma.unwrap_or(sweep.sigma);
            cmd_compare(&engine, &sweep, cli.json)?
        }
        Commands::Grid { source, resolution } => {
            let mut grid = config.grid.clone();
            grid.resolution = resolution.unwrap_or(grid.resolution);
            let spec = GridSpec::from_config(&grid)?;
            cmd_grid(Arc::new(engine), spec, source.into()).await?
        }
        Commands::Config { show } => cmd_config(&cli.config, &config, show, cli.json)?,
    }

    Ok(())
}

/// `RUST_LOG` wins, then `-v`, then `logging.level` from the config.
fn init_tracing(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_theta(engine: &RiemannSiegel, t: f64, as_json: bool) -> Result<()> {
    let theta = engine.theta(t)?;
    if as_json {
        println!("{}", json!({ "t": t, "theta": theta }));
    } else {
        println!("θ({t}) = {theta}");
    }
    Ok(())
}

fn cmd_z(
    engine: &RiemannSiegel,
    t: f64,
    terms: Option<usize>,
    show_terms: bool,
    as_json: bool,
) -> Result<()> {
    let z = engine.z(t, terms)?;
    if as_json {
        let mut out = json!({ "t": t, "z": z.value, "term_count": z.terms.len() });
        if show_terms {
            out["terms"] = json!(z.terms);
        }
        println!("{out}");
        return Ok(());
    }
    println!("Z({t}) = {} ({} terms)", z.value, z.terms.len());
    if show_terms {
        for (n, term) in z.terms.iter().enumerate() {
            println!("  n = {:>4}  {term}", n + 1);
        }
    }
    Ok(())
}

fn cmd_zeta(
    engine: &RiemannSiegel,
    s: Complex64,
    terms: Option<usize>,
    as_json: bool,
) -> Result<()> {
    let evaluation = engine.evaluate(s, terms)?;
    if as_json {
        println!(
            "{}",
            json!({ "s": s, "value": evaluation.value, "regime": evaluation.regime })
        );
    } else {
        println!(
            "ζ({s}) = {} [{:?}]",
            evaluation.value, evaluation.regime
        );
    }
    Ok(())
}

fn cmd_compare(
    engine: &RiemannSiegel,
    sweep: &siegel_config::SweepConfig,
    as_json: bool,
) -> Result<()> {
    let comparisons = engine.sweep(sweep)?;
    let summary = SweepSummary::from_comparisons(&comparisons);
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "comparisons": comparisons,
                "summary": summary,
            }))?
        );
        return Ok(());
    }

    println!("t,approx_re,approx_im,reference_re,reference_im,abs_error,relative_error");
    for c in &comparisons {
        println!(
            "{},{},{},{},{},{},{}",
            c.t,
            c.approx.re,
            c.approx.im,
            c.reference.re,
            c.reference.im,
            c.abs_error(),
            c.relative_error()
        );
    }
    if let Some(summary) = summary {
        info!(
            points = summary.points,
            max_abs_error = summary.max_abs_error,
            mean_abs_error = summary.mean_abs_error,
            max_relative_error = summary.max_relative_error,
            "Sweep complete"
        );
    }
    Ok(())
}

/// Rows are independent, so each one is sampled on the blocking pool.
async fn cmd_grid(engine: Arc<RiemannSiegel>, spec: GridSpec, source: GridSource) -> Result<()> {
    info!(resolution = spec.resolution, ?source, "Sampling grid");
    let rows = sample_rows(engine, spec, source).await?;

    println!("re,im,magnitude,phase_degrees");
    let mut failed = 0;
    for cell in rows.iter().flatten() {
        if !cell.is_valid() {
            failed += 1;
        }
        println!("{}", csv_row(cell));
    }
    if failed > 0 {
        tracing::warn!(failed, "Some grid points could not be evaluated");
    }
    Ok(())
}

/// Sample every grid row on the blocking pool. Rows come back in
/// imaginary-axis order whatever order the tasks finish in.
async fn sample_rows(
    engine: Arc<RiemannSiegel>,
    spec: GridSpec,
    source: GridSource,
) -> Result<Vec<Vec<GridCell>>> {
    let im_points = spec.im_points();
    let mut set = JoinSet::new();
    for (index, im) in im_points.iter().copied().enumerate() {
        let engine = Arc::clone(&engine);
        set.spawn_blocking(move || (index, engine.sample_row(&spec, im, source)));
    }

    let mut rows = vec![Vec::new(); im_points.len()];
    while let Some(joined) = set.join_next().await {
        let (index, row) = joined.context("grid row task panicked")?;
        rows[index] = row;
    }
    Ok(rows)
}

fn csv_row(cell: &GridCell) -> String {
    format!(
        "{},{},{},{}",
        cell.re, cell.im, cell.magnitude, cell.phase_degrees
    )
}

fn cmd_config(config_path: &Path, config: &AppConfig, show: bool, as_json: bool) -> Result<()> {
    if !show {
        println!("Configuration at '{}' is valid.", config_path.display());
        return Ok(());
    }
    if as_json {
        println!("{}", config.to_json_pretty()?);
    } else {
        let toml_str =
            toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {e}"))?;
        println!("{toml_str}");
    }
    Ok(())
}

/// Load the config file, falling back to defaults when it does not exist.
/// The flag reports whether the file was found.
async fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        let config = AppConfig::load(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use siegel_test_utils::temp_config::TempConfig;

    #[test]
    fn test_parse_zeta_with_negative_height() {
        let cli = Cli::try_parse_from(["siegel", "zeta", "0.25", "-30", "--terms", "3"]).unwrap();
        match cli.command {
            Commands::Zeta { sigma, t, terms } => {
                assert_eq!(sigma, 0.25);
                assert_eq!(t, -30.0);
                assert_eq!(terms, Some(3));
            }
            _ => panic!("expected zeta subcommand"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "siegel",
            "theta",
            "20",
            "--json",
            "--jitter",
            "--conjugate-phase",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.jitter);
        assert!(cli.conjugate_phase);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("siegel.toml"));
    }

    #[test]
    fn test_grid_source_values() {
        let cli = Cli::try_parse_from(["siegel", "grid", "--source", "riemann-siegel"]).unwrap();
        match cli.command {
            Commands::Grid { source, resolution } => {
                assert_eq!(GridSource::from(source), GridSource::RiemannSiegel);
                assert_eq!(resolution, None);
            }
            _ => panic!("expected grid subcommand"),
        }
        assert!(Cli::try_parse_from(["siegel", "grid", "--source", "mpmath"]).is_err());
    }

    #[test]
    fn test_csv_row() {
        let cell = GridCell {
            re: 0.5,
            im: -2.0,
            magnitude: 1.25,
            phase_degrees: f64::NAN,
        };
        assert_eq!(csv_row(&cell), "0.5,-2,1.25,NaN");
    }

    #[test_log::test(tokio::test)]
    async fn test_sample_rows_keeps_row_order() {
        let engine = Arc::new(RiemannSiegel::new());
        let spec = GridSpec::new((2.0, 3.0), (-1.0, 1.0), 5).unwrap();
        let rows = sample_rows(Arc::clone(&engine), spec, GridSource::Reference)
            .await
            .unwrap();
        assert_eq!(rows.len(), 5);
        for (row, im) in rows.iter().zip(spec.im_points()) {
            assert_eq!(row.len(), 5);
            assert!(row.iter().all(|cell| cell.im == im && cell.is_valid()));
        }
        let sequential = engine.sample_grid(&spec, GridSource::Reference);
        assert_eq!(rows.concat(), sequential.cells);
    }

    #[test_log::test(tokio::test)]
    async fn test_load_config_from_file() {
        let file = TempConfig::with_toml("[logging]\nlevel = \"debug\"\n").await;
        let (config, from_file) = load_config(file.path()).await.unwrap();
        assert!(from_file);
        assert_eq!(config.logging.level, "debug");
    }

    #[test_log::test(tokio::test)]
    async fn test_missing_config_uses_defaults() {
        let (config, from_file) = load_config(Path::new("/nonexistent/siegel.toml"))
            .await
            .unwrap();
        assert!(!from_file);
        assert_eq!(config.engine.max_recursion_depth, 4);
    }

    #[test_log::test(tokio::test)]
    async fn test_invalid_config_is_an_error() {
        let file = TempConfig::with_toml("[engine]\nmax_recursion_depth = 0\n").await;
        assert!(load_config(file.path()).await.is_err());
    }
}
