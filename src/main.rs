use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use std::process::ExitCode;
use std::time::Instant;

use asset_generator::assets::{AssetGenerator, GenerationConfig, GenerationEvent};
use asset_generator::cli::Args;
use asset_generator::utils::{
    create_progress_bar, error_println, format_bytes, format_duration, format_error_chain,
    validate_inputs, verbose_println, warn_println,
};
use asset_generator::{GenerationReport, JsonMessage};

fn main() -> ExitCode {
    let args = Args::parse();

    let result = run(&args);
    if let Err(e) = &result {
        let line = failure_line(e, args.json_progress);
        if args.json_progress {
            println!("{}", line);
        } else {
            println!();
            error_println(&line);
        }
    }

    ExitCode::from(exit_status(&result))
}

/// Process exit status for a finished run: 0 on success, 1 on any failure
fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// The single line reported for a failed run
fn failure_line(err: &anyhow::Error, json: bool) -> String {
    let message = format_error_chain(err);
    if !json {
        return message;
    }

    let failed = JsonMessage::failed(message.clone());
    serde_json::to_string(&failed).unwrap_or(message)
}

fn run(args: &Args) -> Result<GenerationReport> {
    let start_time = Instant::now();
    let json = args.json_progress;
    let verbose = args.verbose_output();

    if !json {
        println!("{}", style("Capacitor Asset Generator").bold().blue());
        println!("{}", style("icon.png + splash.png from one source image").dim());
        println!();
    }

    let config = GenerationConfig::new(&args.source_path, &args.output_dir);

    if verbose {
        println!("{}", style("Configuration:").bold());
        println!("  Source: {}", config.source_path.display());
        println!("  Output directory: {}", config.output_dir.display());
        println!("  Resampling: Lanczos3, stretched to square (aspect ratio not preserved)");
        println!();
    }

    validate_inputs(&config.source_path).context("Invalid source path")?;

    let output_dir = config.output_dir.clone();
    let generator = AssetGenerator::new(config);

    let total_steps = GenerationEvent::TOTAL_STEPS;
    let progress = if json || verbose {
        ProgressBar::hidden()
    } else {
        create_progress_bar(total_steps)
    };
    let mut step = 0;

    let result = generator.generate(|event| {
        let message = match event {
            GenerationEvent::Decoding { path } => format!("Decoding {}", path.display()),
            GenerationEvent::Decoded {
                width,
                height,
                color,
            } => {
                step += 1;
                if width != height && !json {
                    progress.suspend(|| {
                        warn_println(&format!(
                            "Source is {}x{}; outputs are square, so the image will be stretched",
                            width, height
                        ))
                    });
                }
                format!("Decoded {}x{} ({:?})", width, height, color)
            }
            GenerationEvent::Resizing { target } => {
                format!("Resizing to {}x{} for {}", target.size(), target.size(), target)
            }
            GenerationEvent::Writing { target, .. } => {
                step += 1;
                format!("Writing {}", target)
            }
            GenerationEvent::Written { asset } => {
                step += 1;
                if json {
                    JsonMessage::asset_written(asset).emit();
                } else {
                    progress.suspend(|| {
                        println!(
                            "{} Created {} at {}",
                            style("✓").green().bold(),
                            style(asset.target).bold(),
                            output_dir.display()
                        )
                    });
                }
                format!("Wrote {}", asset.target)
            }
        };

        if json {
            JsonMessage::progress(step, total_steps, message);
        } else {
            verbose_println(verbose, &message);
            progress.set_position(step);
            progress.set_message(message);
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            progress.abandon_with_message("✗ Generation failed");
            return Err(e).context("Asset generation failed");
        }
    };

    progress.finish_with_message("✓ All assets written");
    let total_time = start_time.elapsed();

    if json {
        JsonMessage::summary(report.assets.len(), total_time.as_secs_f64()).emit();
        return Ok(report);
    }

    println!();
    println!("{}", style("Results Summary:").bold().green());
    println!(
        "  Source: {} ({}x{}, {:?})",
        style(report.source_path.display()).bold(),
        report.source_width,
        report.source_height,
        report.source_color
    );
    for asset in &report.assets {
        println!(
            "  {}: {}x{}, {} in {}",
            style(asset.target).bold().cyan(),
            asset.width,
            asset.height,
            style(format_bytes(asset.bytes)).dim(),
            format_duration(asset.duration)
        );
    }

    println!();
    println!("{}", style("Performance:").bold().blue());
    println!(
        "  Total processing time: {}",
        style(format_duration(total_time)).bold()
    );

    println!();
    println!("{}", style("Output files:").bold().green());
    println!("  All files: {}", output_dir.display());

    Ok(report)
}
