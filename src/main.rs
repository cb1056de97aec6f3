//! Skeleton installer CLI entrypoint.
//!
//! Wires locked stdio into the console, runs the installation flow, and
//! maps its result to the process exit code: `0` on success, `9` when
//! the operator cancels, `1` on failure.

use clap::Parser;
use skeleton_installer::cli::Cli;
use skeleton_installer::console::Console;
use skeleton_installer::error::Result;
use skeleton_installer::install::{self, EXIT_CANCELLED, InstallOutcome};
use skeleton_installer::syntax::PhpSyntax;
use std::io::Write;

fn main() {
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let mut console = Console::new(&mut input, &mut output);

    let result = install::run(&mut console, &cli.project_root, &PhpSyntax);
    let exit_code = exit_code_for_run_result(result, &mut std::io::stderr());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<InstallOutcome>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(InstallOutcome::Completed { .. }) => 0,
        Ok(InstallOutcome::Cancelled) => EXIT_CANCELLED,
        Err(err) => {
            if writeln!(stderr, "{err}").is_err() {
                // Best-effort reporting; nowhere left to write.
            }
            1
        }
    }
}
