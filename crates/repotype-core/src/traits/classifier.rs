//! `Classifier` trait — maps an entry name to a coarse file-type category.

/// A total, pure mapping from entry name to category.
///
/// Implementations never fail: names they do not recognize map to
/// `"unknown"` (or whatever fallback the implementation documents).
pub trait Classifier {
    fn classify(&self, name: &str) -> String;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> String,
{
    fn classify(&self, name: &str) -> String {
        self(name)
    }
}
