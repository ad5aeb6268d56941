use aq_app::{AppResult, ComponentSpec, ExportFormat, query, run_service};
use aq_components::ComponentKind;
use aq_controls::Astable555;
use aq_sim::{SimOptions, SimProgress};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "aq-cli")]
#[command(about = "Aquaflow CLI - Aquaponics water flow simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List component kinds and their parameters
    Components,
    /// Run a chain of components
    Run {
        /// Component spec, e.g. "Container outflow=5 threshold=10 start_content=0".
        /// Repeat in water-flow order.
        #[arg(short, long = "component", required = true, value_parser = parse_component)]
        components: Vec<ComponentSpec>,
        /// Time step in seconds (1-3600)
        #[arg(long, default_value_t = SimOptions::default().time_step_s)]
        step: u32,
        /// Run length in hours (1-24)
        #[arg(long, default_value_t = SimOptions::default().duration_h)]
        hours: u32,
        /// Export format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
        }
    }
}

fn parse_component(s: &str) -> AppResult<ComponentSpec> {
    aq_app::parse_spec(s)
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Components => {
            cmd_components();
            Ok(())
        }
        Commands::Run {
            components,
            step,
            hours,
            format,
            output,
        } => cmd_run(
            &components,
            SimOptions::new(step, hours),
            format.into(),
            output.as_deref(),
        ),
    }
}

fn cmd_components() {
    println!("Component kinds:");
    for kind in ComponentKind::ALL {
        println!("  {}", kind);
        for param in kind.params() {
            println!("    {:<14} {:<28} {}", param.name, param.label, param.kind);
        }
    }
}

fn cmd_run(
    specs: &[ComponentSpec],
    opts: SimOptions,
    format: ExportFormat,
    output: Option<&Path>,
) -> AppResult<()> {
    tracing::debug!(specs = specs.len(), "assembling chain");
    let mut chain = aq_app::assemble(specs, Astable555)?;
    eprintln!(
        "Running {} components: step = {} s, duration = {} h",
        chain.len(),
        opts.time_step_s,
        opts.duration_h
    );

    let mut last_emit = Instant::now();
    let result = run_service::run_with_progress(&mut chain, &opts, |p| {
        if p.step == p.total_steps || last_emit.elapsed().as_millis() >= 100 {
            render_cli_progress(&p);
            last_emit = Instant::now();
        }
    });
    clear_progress_line();
    let output_data = result?;

    let summary = query::get_run_summary(&output_data)?;
    eprintln!("✓ Simulation completed in {:.3} s", output_data.elapsed_wall_s);
    eprintln!(
        "  Samples: {} (t = {}..{} s)",
        summary.sample_count, summary.time_range_s.0, summary.time_range_s.1
    );
    for c in &summary.components {
        match (c.min, c.max, c.last) {
            (Some(min), Some(max), Some(last)) => eprintln!(
                "  {:<24} min {:>10.3}  max {:>10.3}  final {:>10.3}",
                c.title, min, max, last
            ),
            _ => eprintln!("  {:<24} (no state)", c.title),
        }
    }

    let text = run_service::export(&output_data, format)?;
    if let Some(path) = output {
        std::fs::write(path, text)?;
        eprintln!(
            "✓ Exported {} samples as {} to {}",
            summary.sample_count,
            format,
            path.display()
        );
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn clear_progress_line() {
    eprint!("\r{}\r", " ".repeat(80));
    let _ = io::stderr().flush();
}

fn render_cli_progress(p: &SimProgress) {
    let fraction = if p.total_steps == 0 {
        1.0
    } else {
        p.step as f64 / p.total_steps as f64
    };
    let width = 28usize;
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    eprint!(
        "\r[{}] {:>6.2}%  t={} s  step={}/{}",
        bar,
        fraction * 100.0,
        p.t_s,
        p.step,
        p.total_steps
    );
    let _ = io::stderr().flush();
}
