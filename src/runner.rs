use std::io;
use std::process::Command;
use std::sync::Mutex;

/// Abstraction over launching the external configuration tool.
/// This allows tests to swap in a recording mock instead of a real `cmake`.
pub trait ToolRunner {
    /// Run `program` with `args`, inheriting this process's stdio, and
    /// block until the child exits.
    ///
    /// Returns the child's exit code, or `None` if it terminated
    /// without one (e.g. killed by a signal).
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>>;
}

/// The Real Runner implementation (Production).
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        // stdin/stdout/stderr are inherited: the tool's own output is
        // the user's only feedback, this process adds nothing.
        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}

/// A Mock Runner for Testing.
///
/// Records every argument vector it receives and reports a scripted
/// outcome instead of spawning anything.
#[derive(Debug, Default)]
pub struct MockRunner {
    /// Every `(program, args)` pair this runner was asked to run.
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
    /// Exit code the fake tool reports.
    pub exit_code: i32,
    /// If true, behave as if the tool is absent from PATH.
    pub missing: bool,
}

impl MockRunner {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner whose fake tool exits with `code`.
    #[allow(dead_code)]
    pub fn with_exit_code(code: i32) -> Self {
        Self {
            exit_code: code,
            ..Default::default()
        }
    }

    /// A runner that behaves as if the tool is not installed.
    #[allow(dead_code)]
    pub fn not_found() -> Self {
        Self {
            missing: true,
            ..Default::default()
        }
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((program.to_string(), args.to_vec()));

        if self.missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{program}: program not found"),
            ));
        }
        Ok(Some(self.exit_code))
    }
}
