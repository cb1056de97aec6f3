//! Tests for the declaration parser and serializer.

use super::*;
use rstest::rstest;

const SAMPLE: &str = concat!(
    "<?php declare(strict_types=1);\n",
    "\n",
    "namespace ApiClients\\Middleware\\Skeleton;\n",
    "\n",
    "final class Middleware\n",
    "{\n",
    "}\n",
);

fn rename(source: &str, namespace: &str) -> String {
    let syntax = PhpSyntax;
    let mut tree = syntax.parse(source).expect("parse failed");
    let index = syntax
        .first_namespace(&tree)
        .expect("expected a namespace declaration");
    syntax.rename_namespace(&mut tree, index, namespace);
    syntax.serialize(&tree)
}

#[test]
fn parse_then_serialize_round_trips_unchanged_source() {
    let syntax = PhpSyntax;
    let tree = syntax.parse(SAMPLE).expect("parse failed");
    assert_eq!(syntax.serialize(&tree), SAMPLE);
}

#[test]
fn rename_changes_only_the_declared_name() {
    let rewritten = rename(SAMPLE, "Acme\\Widgets");
    assert_eq!(
        rewritten,
        SAMPLE.replace("ApiClients\\Middleware\\Skeleton", "Acme\\Widgets")
    );
}

#[test]
fn rename_preserves_declaration_spacing_and_comments() {
    let source = "  namespace   Old\\Name ; // keep me\n";
    let rewritten = rename(source, "New\\Name");
    assert_eq!(rewritten, "  namespace   New\\Name ; // keep me\n");
}

#[test]
fn first_namespace_is_none_without_declaration() {
    let syntax = PhpSyntax;
    let tree = syntax
        .parse("<?php\n$x = 1;\n")
        .expect("parse failed");
    assert!(syntax.first_namespace(&tree).is_none());
}

#[test]
fn only_the_first_declaration_is_renamed() {
    let source = "namespace First;\nnamespace Second;\n";
    let rewritten = rename(source, "Target");
    assert_eq!(rewritten, "namespace Target;\nnamespace Second;\n");
}

#[test]
fn rename_of_non_declaration_index_is_ignored() {
    let syntax = PhpSyntax;
    let mut tree = syntax.parse(SAMPLE).expect("parse failed");
    syntax.rename_namespace(&mut tree, 0, "Acme\\Widgets");
    assert_eq!(syntax.serialize(&tree), SAMPLE);
}

#[rstest]
#[case::method_call("$container->namespace();\n")]
#[case::identifier_prefix("namespaceHelper::run();\n")]
#[case::mention_in_string("// the namespace: keyword is discussed here\n")]
fn non_declaration_lines_pass_through(#[case] source: &str) {
    let syntax = PhpSyntax;
    let tree = syntax.parse(source).expect("parse failed");
    assert!(syntax.first_namespace(&tree).is_none());
    assert_eq!(syntax.serialize(&tree), source);
}

#[rstest]
#[case::no_terminator("namespace Foo\\Bar\n")]
#[case::brace_form("namespace Foo {\n")]
fn unterminated_declarations_fail_to_parse(#[case] source: &str) {
    let err = PhpSyntax.parse(source).expect_err("expected parse failure");
    assert!(matches!(err, SyntaxError::UnterminatedDeclaration { line: 1 }));
}

#[rstest]
#[case::empty_name("namespace ;\n", "")]
#[case::leading_digit("namespace 9Lives;\n", "9Lives")]
#[case::empty_segment("namespace Foo\\\\Bar;\n", "Foo\\\\Bar")]
#[case::space_in_name("namespace Foo Bar;\n", "Foo Bar")]
fn malformed_names_fail_to_parse(#[case] source: &str, #[case] reported: &str) {
    let err = PhpSyntax.parse(source).expect_err("expected parse failure");
    assert!(
        matches!(err, SyntaxError::MalformedName { ref name, line: 1 } if name.as_str() == reported),
        "unexpected error: {err:?}"
    );
}

#[test]
fn error_lines_are_one_based_and_point_at_the_declaration() {
    let source = "<?php\n\nnamespace Broken\n";
    let err = PhpSyntax.parse(source).expect_err("expected parse failure");
    assert!(matches!(err, SyntaxError::UnterminatedDeclaration { line: 3 }));
}
