//! Human-readable output for a pipeline [`Outcome`].

use colored::Colorize;

use psa_sync::{CheckReport, Outcome, Verdict, WriteResult};

const STALE_MESSAGE: &str = "Error: PSA Kconfig and header files do not match with the current \
                             version of MbedTLS. Please update them.";

pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Generated(writes) => print_writes(writes),
        Outcome::Checked(report) => print_report(report),
    }
}

fn print_writes(writes: &[WriteResult]) {
    for w in writes {
        match w {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::Unchanged { path } => println!("  ·  {}", path.display()),
        }
    }
}

fn print_report(report: &CheckReport) {
    if report.is_current() {
        println!("{} PSA Kconfig and header files are up to date", "✓".green().bold());
        return;
    }

    for (path, verdict) in &report.verdicts {
        match verdict {
            Verdict::Current => {}
            Verdict::Stale { unified_diff } => {
                print!("{unified_diff}");
                if !unified_diff.ends_with('\n') {
                    println!();
                }
            }
            Verdict::Unreadable { reason } => {
                eprintln!("{} {}: {reason}", "✗".red().bold(), path.display());
            }
        }
    }
    for path in report.stale_paths() {
        eprintln!("{} out of date: {}", "■".yellow().bold(), path.display());
    }
    eprintln!("{STALE_MESSAGE}");
}
