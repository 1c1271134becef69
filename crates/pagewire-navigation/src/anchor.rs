//! Anchor href classification

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorTarget {
    /// Bare `#`
    Top,
    /// `#<id>`
    Fragment(String),
    /// Not an in-page link
    External,
}

impl AnchorTarget {
    pub fn parse(href: &str) -> Self {
        match href.strip_prefix('#') {
            None => AnchorTarget::External,
            Some("") => AnchorTarget::Top,
            Some(fragment) => AnchorTarget::Fragment(fragment.to_string()),
        }
    }

    /// Whether clicking the link should suppress the default navigation.
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, AnchorTarget::External)
    }

    pub fn fragment(&self) -> Option<&str> {
        match self {
            AnchorTarget::Fragment(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top() {
        assert_eq!(AnchorTarget::parse("#"), AnchorTarget::Top);
        assert!(AnchorTarget::parse("#").is_intercepted());
    }

    #[test]
    fn test_parse_fragment() {
        let target = AnchorTarget::parse("#download");
        assert_eq!(target.fragment(), Some("download"));
        assert!(target.is_intercepted());
    }

    #[test]
    fn test_parse_external() {
        assert_eq!(
            AnchorTarget::parse("https://example.com/#download"),
            AnchorTarget::External
        );
        assert_eq!(AnchorTarget::parse("page.html"), AnchorTarget::External);
        assert!(!AnchorTarget::parse("/docs").is_intercepted());
        assert_eq!(AnchorTarget::parse(" #faq"), AnchorTarget::External);
    }
}
