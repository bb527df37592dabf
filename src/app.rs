use anyhow::Result;

use crate::config::Config;
use crate::core::{
    DuplicateGroups, RemovalReport, ScanError, ScanReport, Scanner, plan_deletions, remove_planned,
};
use crate::interrupt::Interrupt;
use crate::progress::progress_bar;
use crate::prompt::Prompt;

/// The exact answer that confirms deletion.
pub const CONFIRMATION: &str = "delete";

pub const CONFIRMATION_QUESTION: &str = "Do you want to delete all duplicate images?";

pub const CONFIRMATION_INSTRUCTION: &str = "Write 'delete' to confirm";

/// What a run ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The scan was cut short by the user; nothing was reported or deleted.
    Interrupted,
    NoDuplicates,
    Listed,
    Declined,
    Deleted(RemovalReport),
}

pub fn is_confirmed(answer: &str) -> bool {
    answer == CONFIRMATION
}

/// Scan `config.directory`, report, then list or (after confirmation) delete
/// the duplicates.
pub fn run(config: &Config, prompt: &mut dyn Prompt, interrupt: &Interrupt) -> Result<RunOutcome> {
    let scanner = Scanner::new(config.hash_size)?.with_cancellation_token(interrupt.token());

    println!("▶ Scanning for duplicates in: {}", config.directory.display());
    let progress = progress_bar(0, "Scanning", config.show_progress)?;
    let scanned = {
        let _armed = interrupt.arm();
        scanner.scan(&config.directory, &progress)
    };
    let report = match scanned {
        Ok(report) => report,
        Err(ScanError::Interrupted) => return Ok(RunOutcome::Interrupted),
        Err(e) => return Err(e.into()),
    };

    print_summary(&report);
    if report.duplicate_count() == 0 {
        return Ok(RunOutcome::NoDuplicates);
    }

    if config.list_only {
        print_groups(&report.groups);
        return Ok(RunOutcome::Listed);
    }

    println!("{CONFIRMATION_QUESTION}");
    let answer = prompt.ask(CONFIRMATION_INSTRUCTION)?;
    if !is_confirmed(&answer) {
        println!("Nothing deleted.");
        return Ok(RunOutcome::Declined);
    }

    let plan = plan_deletions(
        &report.groups,
        &config.directory,
        config.secondary_extension.as_deref(),
    );
    let progress = progress_bar(plan.len() as u64, "Deleting", config.show_progress)?;
    let removal = remove_planned(&plan, &progress);
    print_removal(&removal);

    Ok(RunOutcome::Deleted(removal))
}

fn print_summary(report: &ScanReport) {
    println!(
        "⏱ Time taken: {:.4} seconds. Total number of files checked: {}",
        report.elapsed.as_secs_f64(),
        report.entries
    );
    println!(
        "▶ Hashed {} image(s) at hash size {} ({} skipped)",
        report.hashed, report.hash_size, report.skipped
    );
    println!("{} duplicate image(s) found.", report.duplicate_count());
}

fn print_groups(groups: &DuplicateGroups) {
    println!("Duplicates found:");
    for group in groups.with_duplicates() {
        println!("\n🏆 {}", group.keeper.display_name());
        for duplicate in &group.duplicates {
            println!("   ▶ {}", duplicate.display_name());
        }
    }
}

fn print_removal(removal: &RemovalReport) {
    println!("🗑️  Deleted {} file(s)", removal.removed.len());
    if !removal.failed.is_empty() {
        println!("Could not delete some files.\nMake sure the following files are not in use.");
        for path in &removal.failed {
            println!("{}", path.display());
        }
    }
}
