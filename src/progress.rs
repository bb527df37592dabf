use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{msg} [{bar:50.green/white}] {percent:>3}% ({pos}/{len})";

/// Progress bar over `len` steps, or a hidden one when `visible` is false.
pub fn progress_bar(len: u64, message: &'static str, visible: bool) -> anyhow::Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let bar = ProgressBar::new(len);
    bar.set_style(ProgressStyle::with_template(TEMPLATE)?.progress_chars("█▌-"));
    bar.set_message(message);
    Ok(bar)
}
