//! Class-name composition
//!
//! Every wrapper builds its `class` attribute the same way: fixed base tokens
//! first, then modifier tokens whose flag is set, then whatever the caller
//! passed in. Tokens are never deduplicated.

/// Joins base tokens, enabled conditional tokens and the caller's extra
/// class into one space-separated class string.
///
/// - `base` tokens appear in order and are always present.
/// - A conditional token appears iff its flag is `true`, in declaration order.
/// - `extra` is trimmed and appended last when non-empty.
///
/// Empty or whitespace-only tokens are skipped, so the result never carries
/// doubled or trailing spaces.
///
/// # Example
///
/// ```
/// use panelkit_core::compose_class_name;
///
/// let class = compose_class_name(
///     &["summary-panel", "summary-panel--info"],
///     &[(false, "summary-panel--compact"), (true, "summary-panel--full-width")],
///     None,
/// );
/// assert_eq!(class, "summary-panel summary-panel--info summary-panel--full-width");
/// ```
pub fn compose_class_name(
    base: &[&str],
    conditionals: &[(bool, &str)],
    extra: Option<&str>,
) -> String {
    let enabled = conditionals
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, token)| *token);

    base.iter()
        .copied()
        .chain(enabled)
        .chain(extra)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A class composition request, built up fluently and rendered with
/// [`StyleRequest::build`].
///
/// ```
/// use panelkit_core::StyleRequest;
///
/// let class = StyleRequest::new(&["loader", "loader--md"])
///     .conditional(true, "loader--overlay")
///     .conditional(false, "loader--inline")
///     .extra(Some("my-loader"))
///     .build();
/// assert_eq!(class, "loader loader--md loader--overlay my-loader");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    base: Vec<&'a str>,
    conditionals: Vec<(bool, &'a str)>,
    extra: Option<&'a str>,
}

impl<'a> StyleRequest<'a> {
    /// Starts a request with the wrapper's fixed base tokens
    pub fn new(base: &[&'a str]) -> Self {
        Self {
            base: base.to_vec(),
            conditionals: Vec::new(),
            extra: None,
        }
    }

    /// Adds a modifier token that is emitted only when `on` is true
    pub fn conditional(mut self, on: bool, token: &'a str) -> Self {
        self.conditionals.push((on, token));
        self
    }

    /// Sets the caller-supplied class string, replacing any earlier one
    pub fn extra(mut self, extra: Option<&'a str>) -> Self {
        self.extra = extra;
        self
    }

    pub fn build(&self) -> String {
        compose_class_name(&self.base, &self.conditionals, self.extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tokens_only() {
        assert_eq!(compose_class_name(&["a", "b"], &[], None), "a b");
    }

    #[test]
    fn disabled_conditionals_are_dropped() {
        let class = compose_class_name(&["a"], &[(false, "off"), (true, "on")], None);
        assert_eq!(class, "a on");
        assert!(!class.contains("off"));
    }

    #[test]
    fn conditionals_keep_declaration_order() {
        let class = compose_class_name(&[], &[(true, "z"), (true, "y"), (true, "x")], None);
        assert_eq!(class, "z y x");
    }

    #[test]
    fn extra_is_trimmed_and_last() {
        assert_eq!(compose_class_name(&[], &[], Some("  x  ")), "x");
        assert_eq!(
            compose_class_name(&["a"], &[(true, "b")], Some(" c d ")),
            "a b c d"
        );
    }

    #[test]
    fn blank_extra_adds_nothing() {
        assert_eq!(compose_class_name(&["a"], &[], Some("")), "a");
        assert_eq!(compose_class_name(&["a"], &[], Some("   ")), "a");
    }

    #[test]
    fn empty_request_is_empty_string() {
        assert_eq!(compose_class_name(&[], &[], None), "");
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(
            compose_class_name(&["card"], &[(true, "card")], Some("card")),
            "card card card"
        );
    }

    #[test]
    fn blank_base_tokens_are_skipped() {
        assert_eq!(compose_class_name(&["a", "", " "], &[], Some("b")), "a b");
    }

    #[test]
    fn builder_matches_function() {
        let request = StyleRequest::new(&["form-wrapper", "form-wrapper--card"])
            .conditional(false, "form-wrapper--full-width")
            .conditional(true, "form-wrapper--compact")
            .extra(Some(" checkout "));

        assert_eq!(
            request.build(),
            compose_class_name(
                &["form-wrapper", "form-wrapper--card"],
                &[
                    (false, "form-wrapper--full-width"),
                    (true, "form-wrapper--compact")
                ],
                Some(" checkout "),
            )
        );
        assert_eq!(
            request.build(),
            "form-wrapper form-wrapper--card form-wrapper--compact checkout"
        );
    }

    #[test]
    fn builder_extra_replaces_previous() {
        let class = StyleRequest::new(&["a"])
            .extra(Some("first"))
            .extra(Some("second"))
            .build();
        assert_eq!(class, "a second");
    }
}
