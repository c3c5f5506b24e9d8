//! Interruption-safe cleanup of the partially created project folder
//!
//! The guard is a small state machine: NotStarted until the clone lands,
//! FolderCreated while the pipeline runs, Finished once the run commits.
//! Cleanup fires iff the state is still FolderCreated when the process
//! stops, whether through normal unwinding (Drop) or an interrupt signal.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::utils::terminal::print_warning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    FolderCreated,
    Finished,
}

#[derive(Debug)]
struct GuardState {
    phase: Phase,
    path: PathBuf,
}

/// Owns the project folder for the duration of a run.
///
/// Unless [`CleanupGuard::finish`] is called, dropping the guard (or an
/// interrupt) removes the folder created by the clone step.
pub struct CleanupGuard {
    state: Arc<Mutex<GuardState>>,
}

impl CleanupGuard {
    pub fn new(path: PathBuf) -> Self {
        Self {
            state: Arc::new(Mutex::new(GuardState {
                phase: Phase::NotStarted,
                path,
            })),
        }
    }

    /// Register cleanup against the interrupt signal. The handler runs on
    /// its own thread, so the state sits behind a mutex shared with it.
    pub fn install_signal_handler(&self) -> Result<()> {
        let state = Arc::clone(&self.state);
        ctrlc::set_handler(move || {
            eprintln!();
            cleanup(&state);
            std::process::exit(130);
        })?;
        Ok(())
    }

    /// The clone step returned successfully; the folder now exists
    pub fn folder_created(&self) {
        self.transition(Phase::FolderCreated);
    }

    /// Commit: the run completed, the folder is kept
    pub fn finish(&self) {
        self.transition(Phase::Finished);
    }

    fn transition(&self, phase: Phase) {
        if let Ok(mut state) = self.state.lock() {
            state.phase = phase;
        }
    }

    #[cfg(test)]
    fn run_cleanup(&self) {
        cleanup(&self.state);
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        cleanup(&self.state);
    }
}

/// Remove the folder iff the run stopped after creating it.
///
/// Consumes the FolderCreated phase first, so a second invocation (signal
/// handler followed by drop) is a no-op. Never panics: the process is
/// already on its way out, so a failed removal is only a warning.
fn cleanup(state: &Mutex<GuardState>) {
    let Ok(mut state) = state.lock() else {
        return;
    };
    if state.phase != Phase::FolderCreated {
        return;
    }
    state.phase = Phase::NotStarted;

    if !state.path.exists() {
        return;
    }
    match fs::remove_dir_all(&state.path) {
        Ok(()) => println!(
            "\n🗑  Removed incomplete project folder: {}",
            state.path.display()
        ),
        Err(_) => print_warning(&format!(
            "Failed to remove folder: {}",
            state.path.display()
        )),
    }
}
