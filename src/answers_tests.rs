//! Tests for the answer set and its derived values.

use super::*;
use rstest::rstest;

fn sample_answers() -> Answers {
    Answers {
        vendor_namespace: "Acme".to_owned(),
        test_vendor_namespace: "Acme\\Tests".to_owned(),
        project_namespace: "Widgets".to_owned(),
        package_name: "acme/widgets".to_owned(),
        author_name: "Jane Doe".to_owned(),
        author_email: "jane@acme.com".to_owned(),
    }
}

#[test]
fn source_namespace_joins_vendor_and_project() {
    assert_eq!(sample_answers().source_namespace(), "Acme\\Widgets");
}

#[test]
fn test_namespace_joins_test_vendor_and_project() {
    assert_eq!(sample_answers().test_namespace(), "Acme\\Tests\\Widgets");
}

#[test]
fn author_combined_formats_name_and_email() {
    assert_eq!(
        sample_answers().author_combined(),
        "Jane Doe <jane@acme.com>"
    );
}

#[rstest]
#[case::simple("Acme", "Widgets", "acme/widgets")]
#[case::already_lowercase("acme", "widgets", "acme/widgets")]
#[case::mixed_case("MyVendor", "MyProject", "myvendor/myproject")]
fn default_package_name_lowercases_both_parts(
    #[case] vendor: &str,
    #[case] project: &str,
    #[case] expected: &str,
) {
    assert_eq!(default_package_name(vendor, project), expected);
}

#[rstest]
#[case::plain("jane@acme.com")]
#[case::subdomain("jane@mail.acme.com")]
#[case::plus_tag("jane+skeleton@acme.com")]
#[case::short_tld("j@a.io")]
fn is_valid_email_accepts_well_formed_addresses(#[case] candidate: &str) {
    assert!(is_valid_email(candidate), "expected valid: {candidate}");
}

#[rstest]
#[case::empty("")]
#[case::no_at("jane.acme.com")]
#[case::no_domain_dot("jane@acme")]
#[case::empty_local("@acme.com")]
#[case::empty_domain("jane@")]
#[case::two_ats("jane@@acme.com")]
#[case::at_in_domain("jane@acme@com.org")]
#[case::trailing_dot("jane@acme.")]
#[case::leading_dot("jane@.acme.com")]
#[case::embedded_space("jane doe@acme.com")]
fn is_valid_email_rejects_malformed_addresses(#[case] candidate: &str) {
    assert!(!is_valid_email(candidate), "expected invalid: {candidate}");
}
