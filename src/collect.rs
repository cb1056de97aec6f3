//! The questionnaire: prompting, summary, and confirmation loop.
//!
//! Collection has no side effects beyond terminal I/O. Each pass through
//! the questions produces a fresh [`Answers`] value; the confirmation step
//! is a pure decision over that value, so restarting is just another loop
//! iteration rather than a jump back into half-mutated state.

use crate::answers::{Answers, default_package_name, is_valid_email};
use crate::console::Console;
use crate::error::Result;

/// Default vendor namespace offered on the first question.
pub const VENDOR_DEFAULT: &str = "MyVendor";
/// Default test vendor namespace.
pub const TEST_VENDOR_DEFAULT: &str = "MyVendor\\Tests";
/// Default project namespace.
pub const PROJECT_DEFAULT: &str = "MyProject";

/// The operator's verdict on a collected answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Apply the answers to the skeleton.
    Proceed,
    /// Discard the answers and ask everything again.
    Restart,
    /// Abandon the installation without touching anything.
    Cancel,
}

/// Labels for the confirmation choice, in presentation order.
const CONFIRMATION_LABELS: [&str; 3] = ["Yes", "Change settings", "Cancel installation"];

/// Run one pass through the question sequence.
///
/// Questions are asked in a fixed order. The package name default is
/// derived from the vendor and project answers already given; the email
/// answer is re-prompted until it passes validation.
///
/// # Errors
///
/// Returns an error if the terminal streams fail or close mid-question.
pub fn collect(console: &mut Console<'_>) -> Result<Answers> {
    console.section("Please answer the following questions.")?;

    let vendor_namespace = console.ask("What is your vendor namespace?", Some(VENDOR_DEFAULT))?;
    let test_vendor_namespace =
        console.ask("What is your vendor test namespace?", Some(TEST_VENDOR_DEFAULT))?;
    let project_namespace =
        console.ask("What is your project namespace?", Some(PROJECT_DEFAULT))?;

    let package_default = default_package_name(&vendor_namespace, &project_namespace);
    let package_name = console.ask("What is your package name?", Some(package_default.as_str()))?;

    let author_name = console.ask("What is your name?", None)?;
    let author_email = console.ask_until(
        "What is your email address?",
        "Invalid email address, try again.",
        is_valid_email,
    )?;

    Ok(Answers {
        vendor_namespace,
        test_vendor_namespace,
        project_namespace,
        package_name,
        author_name,
        author_email,
    })
}

/// Present the summary table and ask for the three-way verdict.
///
/// # Errors
///
/// Returns an error if the terminal streams fail or close mid-prompt.
pub fn confirm(console: &mut Console<'_>, answers: &Answers) -> Result<Confirmation> {
    console.section("Summary:")?;

    let source_namespace = answers.source_namespace();
    let test_namespace = answers.test_namespace();
    console.table(&[
        ("Your namespace", source_namespace.as_str()),
        ("Your test namespace", test_namespace.as_str()),
        ("Your package", answers.package_name.as_str()),
        ("Author name", answers.author_name.as_str()),
        ("Author email", answers.author_email.as_str()),
    ])?;

    let selected = console.choice("All settings correct?", &CONFIRMATION_LABELS, 0)?;
    Ok(match selected {
        0 => Confirmation::Proceed,
        1 => Confirmation::Restart,
        _ => Confirmation::Cancel,
    })
}

/// Repeat the collect/confirm cycle until the operator proceeds or cancels.
///
/// Returns `None` when the operator cancels; prior answers are discarded
/// on every restart.
///
/// # Errors
///
/// Returns an error if the terminal streams fail or close mid-cycle.
pub fn collect_until_confirmed(console: &mut Console<'_>) -> Result<Option<Answers>> {
    loop {
        let answers = collect(console)?;
        match confirm(console, &answers)? {
            Confirmation::Proceed => return Ok(Some(answers)),
            Confirmation::Restart => {}
            Confirmation::Cancel => return Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;
