//! String helpers.

/// Extension trait for `str`.
pub trait StrExt {
    /// Split at the first `separator`; the whole string and `""` if absent.
    fn split_once_or_whole(&self, separator: char) -> (&str, &str);
}

impl StrExt for str {
    fn split_once_or_whole(&self, separator: char) -> (&str, &str) {
        self.split_once(separator).unwrap_or((self, ""))
    }
}

/// Emptiness check that treats absence as empty.
pub trait OptionStrExt {
    fn is_none_or_empty(&self) -> bool;
}

impl OptionStrExt for Option<&str> {
    fn is_none_or_empty(&self) -> bool {
        self.is_none_or(str::is_empty)
    }
}

impl OptionStrExt for Option<String> {
    fn is_none_or_empty(&self) -> bool {
        self.as_deref().is_none_or_empty()
    }
}
