//! The parser/serializer capability for targeted namespace renaming.
//!
//! The rewrite pass does not parse source text itself; it orchestrates a
//! [`SyntaxRewriter`], an injected capability that can round-trip a file
//! while exposing its top-level namespace declaration for replacement.
//! [`PhpSyntax`] is the concrete implementation for the skeleton's
//! source language.
//!
//! The tree is a line-level statement sequence. A declaration line is
//! decomposed into the text before the name, the name itself, and the
//! text from the terminating `;` onwards, so renaming touches only the
//! name and serialization reproduces every other byte exactly. This is
//! stricter than a pretty-printing round trip: a file whose declaration
//! is renamed differs from the input only in the name component.

use thiserror::Error;

/// Errors produced while parsing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `namespace` keyword line has no terminating `;`.
    #[error("unterminated namespace declaration on line {line}")]
    UnterminatedDeclaration {
        /// One-based line number of the offending declaration.
        line: usize,
    },

    /// A namespace declaration names something that is not a namespace.
    #[error("malformed namespace name {name:?} on line {line}")]
    MalformedName {
        /// The text found where a namespace name was expected.
        name: String,
        /// One-based line number of the offending declaration.
        line: usize,
    },
}

/// One line of a parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A top-level namespace declaration, split around its name.
    Namespace {
        /// Everything before the name, including the keyword and spacing.
        lead: String,
        /// The declared namespace name.
        name: String,
        /// Everything from the terminating `;` to the end of the line.
        trail: String,
    },
    /// Any other line, reproduced verbatim.
    Verbatim(String),
}

impl Statement {
    fn render(&self, out: &mut String) {
        match self {
            Self::Namespace { lead, name, trail } => {
                out.push_str(lead);
                out.push_str(name);
                out.push_str(trail);
            }
            Self::Verbatim(line) => out.push_str(line),
        }
    }
}

/// A parsed source file: an ordered statement sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTree {
    statements: Vec<Statement>,
}

impl SourceTree {
    /// The parsed statements, in file order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

/// Parser/serializer capability used by the namespace rewrite pass.
#[cfg_attr(test, mockall::automock)]
pub trait SyntaxRewriter {
    /// Parse source text into a statement tree.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] when a declaration cannot be understood.
    fn parse(&self, source: &str) -> Result<SourceTree, SyntaxError>;

    /// Index of the first top-level namespace declaration, if any.
    fn first_namespace(&self, tree: &SourceTree) -> Option<usize>;

    /// Replace the name component of the declaration at `index`.
    ///
    /// Indices that do not refer to a namespace declaration are ignored.
    fn rename_namespace(&self, tree: &mut SourceTree, index: usize, name: &str);

    /// Serialize the tree back to source text.
    fn serialize(&self, tree: &SourceTree) -> String;
}

/// Concrete [`SyntaxRewriter`] for the skeleton's PHP sources.
///
/// Recognizes `namespace Vendor\Project;` declaration lines. The grammar
/// is deliberately narrow: only the declaration statement is understood,
/// everything else passes through verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpSyntax;

impl SyntaxRewriter for PhpSyntax {
    fn parse(&self, source: &str) -> Result<SourceTree, SyntaxError> {
        let mut statements = Vec::new();
        for (index, line) in source.split_inclusive('\n').enumerate() {
            statements.push(parse_line(line, index + 1)?);
        }
        Ok(SourceTree { statements })
    }

    fn first_namespace(&self, tree: &SourceTree) -> Option<usize> {
        tree.statements
            .iter()
            .position(|statement| matches!(statement, Statement::Namespace { .. }))
    }

    fn rename_namespace(&self, tree: &mut SourceTree, index: usize, name: &str) {
        if let Some(Statement::Namespace {
            name: declared, ..
        }) = tree.statements.get_mut(index)
        {
            *declared = name.to_owned();
        }
    }

    fn serialize(&self, tree: &SourceTree) -> String {
        let mut out = String::new();
        for statement in &tree.statements {
            statement.render(&mut out);
        }
        out
    }
}

/// Classify one source line, decomposing a declaration around its name.
fn parse_line(line: &str, line_number: usize) -> Result<Statement, SyntaxError> {
    let Some(after_keyword) = declaration_remainder(line) else {
        return Ok(Statement::Verbatim(line.to_owned()));
    };

    let Some(terminator) = after_keyword.find(';') else {
        return Err(SyntaxError::UnterminatedDeclaration { line: line_number });
    };

    let name = after_keyword[..terminator].trim_end();
    if !is_valid_namespace_name(name) {
        return Err(SyntaxError::MalformedName {
            name: name.to_owned(),
            line: line_number,
        });
    }

    let name_start = line.len() - after_keyword.len();
    let trail_start = name_start + terminator;
    Ok(Statement::Namespace {
        lead: line[..name_start].to_owned(),
        name: name.to_owned(),
        trail: line[name_start + name.len()..trail_start]
            .to_owned()
            + &line[trail_start..],
    })
}

/// Return the text after `namespace ` when the line is a declaration.
fn declaration_remainder(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix("namespace")?;
    // Reject identifiers that merely start with the keyword.
    let first = rest.chars().next()?;
    if !first.is_whitespace() {
        return None;
    }
    Some(rest.trim_start())
}

/// Check that a namespace name is a backslash-joined identifier path.
fn is_valid_namespace_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('\\').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|first| first.is_alphabetic() || first == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
