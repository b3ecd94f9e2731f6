//! Line highlight fragments.

use crate::models::LinesSpecifier;
use crate::remote::Provider;

/// Anchor prefix of Bitbucket source pages.
pub const BITBUCKET_LINES_PREFIX: &str = "lines";

/// Formats the `#...` fragment highlighting `lines`.
///
/// | Provider | Line | Range |
/// |----------|------|-------|
/// | GitHub, unknown | `#L1` | `#L1-L2` |
/// | GitLab | `#L1` | `#L1-2` |
/// | Bitbucket | `#{prefix}-1` | `#{prefix}-1:2` |
///
/// Returns an empty string when `lines` is `None`.
pub fn format_lines(
    provider: Provider,
    lines: Option<LinesSpecifier>,
    bitbucket_prefix: &str,
) -> String {
    let Some(lines) = lines else {
        return String::new();
    };
    let numbers = lines.numbers();
    let join = |separator: &str| {
        numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    };

    match provider {
        Provider::Bitbucket => format!("#{bitbucket_prefix}-{}", join(":")),
        Provider::GitLab => format!("#L{}", join("-")),
        Provider::GitHub | Provider::Unknown => format!(
            "#{}",
            numbers
                .iter()
                .map(|n| format!("L{n}"))
                .collect::<Vec<_>>()
                .join("-")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: Option<LinesSpecifier> = Some(LinesSpecifier::Line(1));
    const RANGE: Option<LinesSpecifier> = Some(LinesSpecifier::Range(1, 2));

    #[test]
    fn test_no_lines() {
        for provider in [Provider::GitHub, Provider::GitLab, Provider::Bitbucket] {
            assert_eq!(format_lines(provider, None, BITBUCKET_LINES_PREFIX), "");
        }
    }

    #[test]
    fn test_github() {
        assert_eq!(format_lines(Provider::GitHub, LINE, "lines"), "#L1");
        assert_eq!(format_lines(Provider::GitHub, RANGE, "lines"), "#L1-L2");
    }

    #[test]
    fn test_gitlab() {
        assert_eq!(format_lines(Provider::GitLab, LINE, "lines"), "#L1");
        assert_eq!(format_lines(Provider::GitLab, RANGE, "lines"), "#L1-2");
    }

    #[test]
    fn test_bitbucket() {
        assert_eq!(format_lines(Provider::Bitbucket, LINE, "lines"), "#lines-1");
        assert_eq!(format_lines(Provider::Bitbucket, RANGE, "lines"), "#lines-1:2");
    }

    #[test]
    fn test_bitbucket_custom_prefix() {
        assert_eq!(
            format_lines(Provider::Bitbucket, RANGE, "README.md"),
            "#README.md-1:2"
        );
    }

    #[test]
    fn test_unknown_uses_github_style() {
        assert_eq!(format_lines(Provider::Unknown, RANGE, "lines"), "#L1-L2");
    }
}
