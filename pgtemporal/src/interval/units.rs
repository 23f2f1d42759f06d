use super::Component;

/// Keyword table for interval units.
///
/// Lookup is ASCII case insensitive.
///
/// # Examples
///
/// ```
/// use pgtemporal::interval::{Component, IntervalUnits};
///
/// const SHORT: IntervalUnits = IntervalUnits::new(&[
///     ("y", Component::Years),
///     ("d", Component::Days),
/// ]);
///
/// assert_eq!(SHORT.lookup("Y"), Some(Component::Years));
/// assert_eq!(SHORT.lookup("years"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalUnits {
    keywords: &'static [(&'static str, Component)],
}

impl IntervalUnits {
    /// Spellings accepted by postgres `interval` input.
    pub const POSTGRES: IntervalUnits = IntervalUnits::new(&[
        ("year", Component::Years),
        ("years", Component::Years),
        ("yr", Component::Years),
        ("yrs", Component::Years),
        ("y", Component::Years),
        ("mon", Component::Months),
        ("mons", Component::Months),
        ("month", Component::Months),
        ("months", Component::Months),
        ("day", Component::Days),
        ("days", Component::Days),
        ("d", Component::Days),
        ("hour", Component::Hours),
        ("hours", Component::Hours),
        ("hr", Component::Hours),
        ("hrs", Component::Hours),
        ("h", Component::Hours),
        ("min", Component::Minutes),
        ("mins", Component::Minutes),
        ("minute", Component::Minutes),
        ("minutes", Component::Minutes),
        ("m", Component::Minutes),
        ("sec", Component::Seconds),
        ("secs", Component::Seconds),
        ("second", Component::Seconds),
        ("seconds", Component::Seconds),
        ("s", Component::Seconds),
    ]);

    pub const fn new(keywords: &'static [(&'static str, Component)]) -> Self {
        Self { keywords }
    }

    /// Find the component named by `word`.
    pub fn lookup(&self, word: &str) -> Option<Component> {
        self.keywords
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
            .map(|&(_, component)| component)
    }
}

impl Default for IntervalUnits {
    fn default() -> Self {
        Self::POSTGRES
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn postgres_spellings() {
        let units = IntervalUnits::default();
        assert_eq!(units.lookup("mons"), Some(Component::Months));
        assert_eq!(units.lookup("MONTH"), Some(Component::Months));
        assert_eq!(units.lookup("m"), Some(Component::Minutes));
        assert_eq!(units.lookup("secs"), Some(Component::Seconds));
        assert_eq!(units.lookup("fortnight"), None);
        assert_eq!(units.lookup(""), None);
    }

    #[test]
    fn every_component_has_a_keyword() {
        for component in Component::ALL {
            assert!(
                IntervalUnits::POSTGRES.keywords.iter().any(|(_, c)| *c == component),
                "{component}"
            );
        }
    }
}
