/*!
 * Command-line interface for flatcat
 */

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};

use flatcat::config::{Args, Command, Config};
use flatcat::error::Result;
use flatcat::export::{self, SelectionList};
use flatcat::filter::{DirExclusions, ExtExclusions};
use flatcat::report::{ExportReport, ExportRun, ReportFormat, Reporter};
use flatcat::survey;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit early if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    // Create a live spinner that mirrors the run's status log
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Processing");

    let start_time = Instant::now();
    let mut run = ExportRun::new(Arc::new(progress.clone()));

    let (operation, output_file) = match &command {
        Command::Compile {
            directory,
            exclude_dirs,
            exclude_extensions,
            output,
        } => {
            let config = Config::new(directory);
            config.validate()?;
            let dirs = DirExclusions::parse(exclude_dirs);
            let exts = ExtExclusions::parse(exclude_extensions);
            let output_path = PathBuf::from(output);

            run.log(format!(
                "Starting source compilation to {}...",
                output_path.display()
            ));
            export::compile(&config.root_dir, &dirs, &exts, &output_path, &mut run)?;
            ("compile", Some(output_path))
        }
        Command::Paths {
            directory,
            exclude_dirs,
            output,
        } => {
            let config = Config::new(directory);
            config.validate()?;
            let dirs = DirExclusions::parse(exclude_dirs);
            let output_path = PathBuf::from(output);

            run.log(format!(
                "Starting path export to {}...",
                output_path.display()
            ));
            export::export_paths(&config.root_dir, &dirs, &output_path, &mut run)?;
            ("paths", Some(output_path))
        }
        Command::Select {
            directory,
            list,
            output,
        } => {
            let config = Config::new(directory);
            config.validate()?;
            let selection = SelectionList::parse(&read_selection_input(list)?);
            let output_path = PathBuf::from(output);

            run.log(format!(
                "Starting selective file export to {}...",
                output_path.display()
            ));
            export::export_selected(&config.root_dir, &selection, &output_path, &mut run)?;
            ("select", Some(output_path))
        }
        Command::Extensions {
            directory,
            exclude_dirs,
        } => {
            let config = Config::new(directory);
            config.validate()?;
            let dirs = DirExclusions::parse(exclude_dirs);

            run.log("Scanning for extensions...".to_string());
            let result = survey::survey(&config.root_dir, &dirs, &mut run);
            progress.suspend(|| print!("{}", result.render_report()));
            ("extensions", None)
        }
    };

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    // Prepare and print the run summary
    let report = ExportReport {
        operation: operation.to_string(),
        output_file: output_file.map(|p| p.display().to_string()),
        duration,
        files_written: run.files_written,
        paths_written: run.paths_written,
        errors: run.errors,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}

/// Read the selective-export path list from a file, or stdin for "-"
fn read_selection_input(list: &str) -> Result<String> {
    if list == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(list)?)
    }
}
