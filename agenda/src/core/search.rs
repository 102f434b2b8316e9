//! Case-insensitive substring matching over contact names.

/// Precompiled "name contains fragment" matcher, ignoring case.
///
/// Behaves like matching the whole name against `*fragment*`: an empty
/// fragment matches every name.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    pub fn new(fragment: &str) -> Self {
        Self {
            needle: fragment.to_lowercase(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}
