/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Canonical form used to compare user input with stored categories.
///
/// Title case: the first letter of every run of letters is uppercased and
/// the rest lowercased, so `"SEPAK bola"` becomes `"Sepak Bola"` and
/// `"e-sport"` becomes `"E-Sport"`.
pub fn canonical_category(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_is_letter = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

/// Which documents a search runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interpret an optional request value. Missing, blank or `"all"` in any
    /// casing searches everything.
    pub fn from_request(raw: Option<&str>) -> Self {
        match raw.map(canonical_category) {
            None => CategoryFilter::All,
            Some(c) if c.is_empty() || c == ALL_CATEGORIES => CategoryFilter::All,
            Some(c) => CategoryFilter::Only(c),
        }
    }

    pub fn accepts(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(c) => c,
        }
    }
}
