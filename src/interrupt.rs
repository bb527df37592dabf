use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Exit status used when the user interrupts the run.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Ctrl-C state shared with the signal handler.
///
/// While armed, an interrupt only raises the cancellation flag so the scan
/// loop can stop between files. Otherwise the process exits straight away.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
    armed: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl-C handler. Call once per process.
    pub fn install_handler(&self) -> Result<(), ctrlc::Error> {
        let interrupt = self.clone();
        ctrlc::set_handler(move || {
            if !interrupt.absorb() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        })
    }

    /// Flag checked by the scan loop.
    pub fn token(&self) -> Arc<AtomicBool> {
        self.requested.clone()
    }

    /// Route interrupts to the cancellation flag until the guard is dropped.
    pub fn arm(&self) -> Armed<'_> {
        self.armed.store(true, Ordering::SeqCst);
        Armed { interrupt: self }
    }

    /// Handle one interrupt. Returns false when nothing is armed and the
    /// caller should terminate.
    pub fn absorb(&self) -> bool {
        if self.armed.load(Ordering::SeqCst) {
            self.requested.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }
}

pub struct Armed<'a> {
    interrupt: &'a Interrupt,
}

impl Drop for Armed<'_> {
    fn drop(&mut self) {
        self.interrupt.armed.store(false, Ordering::SeqCst);
    }
}
