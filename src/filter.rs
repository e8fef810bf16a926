/// One categorical filter choice. `Any` is the explicit form of the
/// dashboard's "الكل" / "كل الحالات" sentinel options — it never collides
/// with a real category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Any,
    Only(String),
}

impl Selection {
    /// Interpret a filter option label. Labels that mean "everything"
    /// ("الكل", "كل الحالات", "كل الفئات", ...) map to Any; anything else
    /// is a concrete category value.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == "الكل" || trimmed.starts_with("كل ") {
            Selection::Any
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

/// Case-insensitive substring match of `query` against a haystack built
/// from the page's searchable fields. An empty query matches everything.
pub fn query_matches(query: &str, haystack: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle)
}

/// Apply a predicate to a record slice, preserving order. The output is
/// always a subsequence of the input; no matches yields an empty vec.
pub fn apply<'a, T>(records: &'a [T], pred: impl Fn(&T) -> bool) -> Vec<&'a T> {
    records.iter().filter(|r| pred(r)).collect()
}
