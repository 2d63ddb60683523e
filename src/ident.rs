/// Sort key for graph identifiers.
///
/// Identifiers made entirely of decimal digits compare numerically and sort
/// before everything else; any other identifier compares by its string form.
/// Digit runs too long for a `u128` fall back to string comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum IdKey<'a> {
    Numeric(u128),
    Text(&'a str),
}

impl<'a> IdKey<'a> {
    pub fn of(id: &'a str) -> Self {
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = id.parse() {
                return IdKey::Numeric(n);
            }
        }

        IdKey::Text(id)
    }
}

/// Total order over identifiers: the numeric-or-text key first, then the raw
/// string, so that e.g. `"007"` and `"7"` still order deterministically.
pub(crate) fn key(id: &str) -> (IdKey<'_>, &str) {
    (IdKey::of(id), id)
}
