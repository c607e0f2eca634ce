//! # Configuration Invoker
//!
//! The core of winconfig. It is responsible for:
//! 1. Constructing the fixed CMake argument vector for the Windows x86_64 build.
//! 2. Executing CMake with that vector and waiting for it to finish.
//! 3. Mapping the outcome to a small error taxonomy the entry point can
//!    turn into a faithful process exit status.
//!
//! The vector is a literal: it is fully determined at authorship time,
//! and no runtime input, environment variable, or file ever alters it.
//! CMake is expected to be run from the build subdirectory, so the
//! build root is always the parent directory.

use log::debug;
use thiserror::Error;

use crate::invariant_ppt::assert_invariant;
use crate::runner::ToolRunner;

/// The build-configuration executable this tool shells out to.
pub const TOOL: &str = "cmake";

/// Relative path from the build directory to the project root.
const BUILD_ROOT: &str = "..";

/// Everything that can go wrong with the single external call.
///
/// All variants are unrecoverable locally: no retry, no downgrade. The
/// entry point logs the error and exits non-zero.
#[derive(Debug, Error)]
pub enum ConfigureError {
    /// CMake could not be located for execution.
    #[error("cmake was not found on PATH: {0}")]
    ToolNotFound(#[source] std::io::Error),
    /// CMake ran but reported failure; carries its exit code so the
    /// process can reflect it.
    #[error("cmake exited with status {0}")]
    ToolFailed(i32),
    /// CMake terminated without an exit code (killed by a signal).
    #[error("cmake terminated without an exit code")]
    ToolInterrupted,
    /// CMake was found but could not be launched.
    #[error("failed to launch cmake: {0}")]
    Launch(#[source] std::io::Error),
}

impl ConfigureError {
    /// The exit status the invoking process should terminate with.
    ///
    /// A tool failure is reflected as-is; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigureError::ToolFailed(code) => *code,
            _ => 1,
        }
    }
}

/// Constructs the fixed argument vector passed to CMake.
///
/// In order: build root, generator selection (`-G`), architecture
/// selection (`-A`), then the cache variables (compiler flags, build
/// type, cross-compilation toggle, platform tag).
pub fn configure_args() -> Vec<String> {
    [
        BUILD_ROOT,
        "-G",
        "Visual Studio 16 2019",
        "-A",
        "x64",
        "-DCMAKE_CXX_FLAGS=/D_SILENCE_TR1_NAMESPACE_DEPRECATION_WARNING",
        "-DCMAKE_BUILD_TYPE=Release",
        "-DCMAKE_CROSSCOMPILING=FALSE",
        "-DPLATFORM=win-X86_64",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Renders the full command line for display (logging, `show`, dry runs).
///
/// Arguments containing spaces are quoted so the rendered line can be
/// pasted into a shell verbatim.
pub fn command_line() -> String {
    let mut parts = vec![TOOL.to_string()];
    parts.extend(configure_args().into_iter().map(|arg| {
        if arg.contains(' ') {
            format!("\"{arg}\"")
        } else {
            arg
        }
    }));
    parts.join(" ")
}

/// The main entry point for the configuration logic.
///
/// # Arguments
///
/// * `runner` - The process boundary; `SystemRunner` in production, a
///   recording mock in tests.
/// * `dry_run` - If true, prints the exact command line and returns
///   without touching the runner.
///
/// # Returns
///
/// `Ok(())` when CMake exits 0; a [`ConfigureError`] otherwise.
pub fn run_configure(runner: &impl ToolRunner, dry_run: bool) -> Result<(), ConfigureError> {
    let args = configure_args();

    assert_invariant(
        args.len() == 9,
        "Configure vector must hold exactly 9 tokens",
        Some("Configure"),
    );
    assert_invariant(
        args[0] == BUILD_ROOT,
        "Configure vector must lead with the build root",
        Some("Configure"),
    );
    assert_invariant(
        args.iter().all(|a| !a.is_empty()),
        "Configure vector must not contain empty tokens",
        Some("Configure"),
    );

    if dry_run {
        println!("{}", command_line());
        return Ok(());
    }

    debug!("Invoking: {}", command_line());

    match runner.run(TOOL, &args) {
        Ok(Some(0)) => {
            debug!("cmake exited cleanly");
            Ok(())
        }
        Ok(Some(code)) => Err(ConfigureError::ToolFailed(code)),
        Ok(None) => Err(ConfigureError::ToolInterrupted),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigureError::ToolNotFound(e)),
        Err(e) => Err(ConfigureError::Launch(e)),
    }
}
