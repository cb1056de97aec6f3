//! Test support utilities for installer behavioural tests.
//!
//! Builds throwaway skeleton scaffolds (manifest plus `src/` and
//! `tests/` trees) and drives the installer binary with scripted
//! keystrokes.

use camino::Utf8PathBuf;
use serde_json::json;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A middleware source file as the skeleton ships it.
pub const SOURCE_FILE: &str = concat!(
    "<?php declare(strict_types=1);\n",
    "\n",
    "namespace ApiClients\\Middleware\\Skeleton;\n",
    "\n",
    "final class Middleware\n",
    "{\n",
    "}\n",
);

/// A middleware test file as the skeleton ships it.
pub const TEST_FILE: &str = concat!(
    "<?php declare(strict_types=1);\n",
    "\n",
    "namespace ApiClients\\Tests\\Middleware\\Skeleton;\n",
    "\n",
    "final class MiddlewareTest\n",
    "{\n",
    "}\n",
);

/// Keystrokes answering every question and confirming with "Yes".
pub const PROCEED_INPUT: &str =
    "Acme\nAcme\\Tests\nWidgets\n\nJane Doe\njane@acme.com\n1\n";

/// Keystrokes answering every question then selecting "Cancel installation".
pub const CANCEL_INPUT: &str = "Acme\nAcme\\Tests\nWidgets\n\nJane Doe\njane@acme.com\n3\n";

/// A temporary skeleton project the installer can be pointed at.
pub struct Scaffold {
    _temp: TempDir,
    /// UTF-8 path to the scaffold root.
    pub root: Utf8PathBuf,
}

/// Build a fresh scaffold with the skeleton's manifest and files.
pub fn scaffold() -> Scaffold {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = Utf8PathBuf::try_from(temp.path().to_owned()).expect("non-UTF8 temp path");

    let manifest = json!({
        "name": "api-clients/middleware-skeleton",
        "description": "Skeleton for HTTP middleware packages",
        "require": {
            "php": "^8.1",
            "composer/composer": "^2.0",
            "nikic/php-parser": "^4.0",
            "ocramius/package-versions": "^2.0",
            "symfony/console": "^6.0"
        },
        "autoload": {
            "psr-4": {
                "ApiClients\\Middleware\\Installer\\": "installer/",
                "ApiClients\\Middleware\\Skeleton\\": "src/"
            }
        },
        "autoload-dev": {
            "psr-4": {"ApiClients\\Tests\\Middleware\\Skeleton\\": "tests/"}
        },
        "scripts": {"post-create-project-cmd": "Install::postCreateProject"}
    });
    std::fs::write(
        root.join("composer.json"),
        serde_json::to_string_pretty(&manifest).expect("failed to render manifest"),
    )
    .expect("failed to write manifest");

    std::fs::create_dir(root.join("src")).expect("failed to create src");
    std::fs::write(root.join("src/Middleware.php"), SOURCE_FILE).expect("failed to write source");
    std::fs::create_dir(root.join("tests")).expect("failed to create tests");
    std::fs::write(root.join("tests/MiddlewareTest.php"), TEST_FILE)
        .expect("failed to write test file");

    Scaffold { _temp: temp, root }
}

/// Run the installer binary against a scaffold with scripted keystrokes.
pub fn run_installer(scaffold: &Scaffold, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_skeleton-installer"))
        .arg("--project-root")
        .arg(scaffold.root.as_str())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn installer binary");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("failed to write scripted input");

    child
        .wait_with_output()
        .expect("failed to wait for installer binary")
}
