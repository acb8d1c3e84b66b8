//! Spinner primitives for the cosmetic "work in progress" indicators.
//!
//! Every renderer/clipboard call in the session finishes near-instantly; the
//! spinner and the short pauses around it exist purely so the user sees
//! something happen. Both are suppressed when stderr is not a terminal, so
//! piped runs and tests proceed at full speed.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

static PROGRESS_ENABLED: AtomicBool = AtomicBool::new(true);

/// RAII handle for an active spinner.
pub struct ProgressHandle {
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    fn disabled() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(true)),
            thread: None,
        }
    }

    /// Stop and clean up the spinner thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Globally enable/disable live progress rendering.
pub fn set_progress_enabled(enabled: bool) {
    PROGRESS_ENABLED.store(enabled, Ordering::Relaxed);
}

fn progress_active() -> bool {
    PROGRESS_ENABLED.load(Ordering::Relaxed) && io::stderr().is_terminal()
}

/// Start a spinner on stderr.
pub fn start_progress(label: impl Into<String>, color: bool) -> ProgressHandle {
    if !progress_active() {
        return ProgressHandle::disabled();
    }

    let label = label.into();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let start = Instant::now();
        let mut idx = 0usize;

        while !stop_flag.load(Ordering::Relaxed) {
            let frame = settings::SPINNER_FRAMES[idx % settings::SPINNER_FRAMES.len()];
            let line = progress_line(frame, &label, start.elapsed(), color);
            let mut err = io::stderr();
            let _ = write!(err, "{line}");
            let _ = err.flush();
            idx += 1;
            thread::sleep(Duration::from_millis(settings::SPINNER_TICK_MS));
        }

        clear_progress_line();
    });

    ProgressHandle {
        stop,
        thread: Some(thread),
    }
}

/// Cosmetic pause, skipped entirely when the spinner would be too.
pub fn pause_ms(millis: u64) {
    if progress_active() {
        thread::sleep(Duration::from_millis(millis));
    }
}

fn progress_line(frame: char, label: &str, elapsed: Duration, color: bool) -> String {
    // Keep elapsed formatting stable so tests can assert deterministic text.
    let elapsed_s = elapsed.as_millis() as f64 / 1000.0;
    if color {
        format!(
            "{}{} {} {}",
            settings::SPINNER_CLEAR_LINE,
            format!("{frame}").with(settings::COLOR_SPINNER_FRAME),
            label.with(settings::COLOR_SPINNER_LABEL),
            format!("({elapsed_s:.1}s)").with(settings::COLOR_SPINNER_LABEL),
        )
    } else {
        format!(
            "{}{frame} {label} ({elapsed_s:.1}s)",
            settings::SPINNER_CLEAR_LINE
        )
    }
}

fn clear_progress_line() {
    let mut err = io::stderr();
    let _ = write!(err, "{}", settings::SPINNER_CLEAR_LINE);
    let _ = err.flush();
}
