/// Keeps only ASCII letters, ASCII digits and the space character, in their
/// original order. Everything else is dropped, not escaped.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| is_allowed(*c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// A user supplied name that has been passed through [`sanitize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedName(String);

impl From<&str> for SanitizedName {
    fn from(value: &str) -> Self {
        Self(sanitize(value))
    }
}

impl From<String> for SanitizedName {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl AsRef<str> for SanitizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SanitizedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
