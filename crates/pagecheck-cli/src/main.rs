use anyhow::Result;
use pagecheck_config::Config;
use pagecheck_engine::{Outcome, Report, io, scenario};
use std::{env, path::PathBuf, process};

use pagecheck_cli::suite;

fn main() -> Result<()> {
    // Determine page path and filter from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let page_path;
    let filter;
    let from_config;

    if args.len() == 2 || args.len() == 3 {
        // CLI arguments provided - use them
        page_path = PathBuf::from(&args[1]);
        filter = args.get(2).cloned();
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                page_path = config.page_path;
                filter = config.filter;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No page path provided and no config file found");
                eprintln!("Usage: {} <page.html> [scenario-filter]", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(2);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <page.html> [scenario-filter]", args[0]);
                process::exit(2);
            }
        }
    } else {
        eprintln!("Usage: {} [page.html] [scenario-filter]", args[0]);
        process::exit(2);
    };

    let markup = match io::read_page_at(&page_path) {
        Ok(markup) => markup,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Page '{}'{} could not be read: {e}",
                page_path.display(),
                source
            );
            process::exit(2);
        }
    };

    let registry = suite::portfolio_suite(filter.as_deref());
    if registry.is_empty() {
        eprintln!("No scenarios match the filter");
        process::exit(2);
    }

    let report = scenario::run(&markup, &registry);
    print_report(&report);

    if !report.all_passed() {
        process::exit(1);
    }
    Ok(())
}

fn print_report(report: &Report) {
    for group in &report.groups {
        let status = if group.passed() { "ok" } else { "FAILED" };
        println!("{} ... {status}", group.name);
        for verdict in &group.verdicts {
            match &verdict.outcome {
                Outcome::Pass => println!("    pass  {}", verdict.name),
                Outcome::Fail { message } => println!("    FAIL  {}: {message}", verdict.name),
                Outcome::Broken { message } => {
                    println!("    BAD SCENARIO  {}: {message}", verdict.name)
                }
            }
        }
    }
    println!(
        "\n{} scenario(s), {} failure(s)",
        report.verdict_count(),
        report.failure_count()
    );
}
