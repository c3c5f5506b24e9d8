//! External process execution

pub mod subprocess;

pub use subprocess::{CommandResult, SystemRunner};

use std::path::Path;

use anyhow::Result;

/// Narrow interface over external binaries.
///
/// The scaffolding pipeline only ever runs a command and checks whether a
/// program exists, so the whole flow can be exercised in tests with a fake
/// runner instead of real git and package-manager binaries.
pub trait CommandRunner {
    /// Run a program, optionally in a working directory. With `inherit_io`
    /// the child streams to the user's terminal and nothing is captured.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
        inherit_io: bool,
    ) -> Result<CommandResult>;

    /// Whether a program is reachable on PATH
    fn check(&self, program: &str) -> bool;
}

#[cfg(test)]
pub mod testing {
    //! A scriptable runner for pipeline tests

    use std::cell::RefCell;
    use std::path::Path;

    use anyhow::Result;

    use super::{CommandRunner, CommandResult};

    /// Records every invocation; fails commands whose argv line contains a
    /// configured needle, and reports configured programs as missing.
    #[derive(Default)]
    pub struct FakeRunner {
        invocations: RefCell<Vec<String>>,
        fail_on: Vec<String>,
        missing: Vec<String>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Commands whose joined argv contains `needle` exit non-zero
        pub fn fail_on(mut self, needle: &str) -> Self {
            self.fail_on.push(needle.to_string());
            self
        }

        /// `check` reports `program` as absent from PATH
        pub fn missing(mut self, program: &str) -> Self {
            self.missing.push(program.to_string());
            self
        }

        /// Joined argv lines of every command run so far, in order
        pub fn commands(&self) -> Vec<String> {
            self.invocations.borrow().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(
            &self,
            program: &str,
            args: &[&str],
            _cwd: Option<&Path>,
            _inherit_io: bool,
        ) -> Result<CommandResult> {
            let line = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            self.invocations.borrow_mut().push(line.clone());

            let failed = self.fail_on.iter().any(|needle| line.contains(needle));
            Ok(CommandResult {
                success: !failed,
                exit_code: if failed { 1 } else { 0 },
                stdout: String::new(),
                stderr: if failed {
                    "simulated failure".to_string()
                } else {
                    String::new()
                },
            })
        }

        fn check(&self, program: &str) -> bool {
            !self.missing.iter().any(|missing| missing == program)
        }
    }
}
