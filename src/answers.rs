//! The answer set collected from the operator.
//!
//! [`Answers`] is an immutable value produced by one pass through the
//! question sequence. Restarting the questionnaire builds a fresh value;
//! nothing is mutated in place across attempts. Derived strings (the
//! combined author, the joined namespaces) are computed on demand so they
//! can never drift out of sync with the fields they are built from.

/// Separator between namespace segments in the skeleton's source language.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// The six answers gathered by the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Vendor namespace for production code, e.g. `Acme`.
    pub vendor_namespace: String,
    /// Vendor namespace for test code, e.g. `Acme\Tests`.
    pub test_vendor_namespace: String,
    /// Project namespace appended to both vendors, e.g. `Widgets`.
    pub project_namespace: String,
    /// Package name for the manifest, e.g. `acme/widgets`.
    pub package_name: String,
    /// Author display name.
    pub author_name: String,
    /// Author email address; always satisfies [`is_valid_email`].
    pub author_email: String,
}

impl Answers {
    /// Namespace applied to files under `src/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skeleton_installer::answers::Answers;
    ///
    /// let answers = Answers {
    ///     vendor_namespace: "Acme".to_owned(),
    ///     test_vendor_namespace: "Acme\\Tests".to_owned(),
    ///     project_namespace: "Widgets".to_owned(),
    ///     package_name: "acme/widgets".to_owned(),
    ///     author_name: "Jane Doe".to_owned(),
    ///     author_email: "jane@acme.com".to_owned(),
    /// };
    /// assert_eq!(answers.source_namespace(), "Acme\\Widgets");
    /// assert_eq!(answers.test_namespace(), "Acme\\Tests\\Widgets");
    /// assert_eq!(answers.author_combined(), "Jane Doe <jane@acme.com>");
    /// ```
    #[must_use]
    pub fn source_namespace(&self) -> String {
        join_namespace(&self.vendor_namespace, &self.project_namespace)
    }

    /// Namespace applied to files under `tests/`.
    #[must_use]
    pub fn test_namespace(&self) -> String {
        join_namespace(&self.test_vendor_namespace, &self.project_namespace)
    }

    /// The manifest author string, `"{name} <{email}>"`.
    #[must_use]
    pub fn author_combined(&self) -> String {
        format!("{} <{}>", self.author_name, self.author_email)
    }
}

/// Join a vendor and project namespace with the namespace separator.
fn join_namespace(vendor: &str, project: &str) -> String {
    format!("{vendor}{NAMESPACE_SEPARATOR}{project}")
}

/// Default package name derived from the vendor and project namespaces.
///
/// # Examples
///
/// ```
/// use skeleton_installer::answers::default_package_name;
///
/// assert_eq!(default_package_name("Acme", "Widgets"), "acme/widgets");
/// ```
#[must_use]
pub fn default_package_name(vendor: &str, project: &str) -> String {
    format!("{}/{}", vendor.to_lowercase(), project.to_lowercase())
}

/// Check whether a candidate string is a well-formed email address.
///
/// The predicate requires exactly one `@` separating a non-empty local
/// part from a dotted domain, and rejects embedded whitespace. It is a
/// gatekeeper for obvious typos, not an RFC 5322 validator.
///
/// # Examples
///
/// ```
/// use skeleton_installer::answers::is_valid_email;
///
/// assert!(is_valid_email("jane@acme.com"));
/// assert!(!is_valid_email("jane.acme.com"));
/// assert!(!is_valid_email("jane@acme"));
/// ```
#[must_use]
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs at least two non-empty dot-separated labels.
    let mut labels = domain.split('.');
    let has_two = labels.clone().count() >= 2;
    has_two && labels.all(|label| !label.is_empty())
}

#[cfg(test)]
#[path = "answers_tests.rs"]
mod tests;
