/// A card's key and the text shown in the details panel when it is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Ordered, immutable key -> content lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentCatalog {
    entries: &'static [ContentEntry],
}

impl ContentCatalog {
    pub const fn new(entries: &'static [ContentEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static ContentEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn entries(&self) -> &'static [ContentEntry] {
        self.entries
    }
}

/// Which card's details are on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPanel {
    catalog: ContentCatalog,
    selected: Option<&'static ContentEntry>,
}

impl ContentPanel {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    /// Shows the entry for `key`. Returns whether anything changed; unknown
    /// keys and the already selected key leave the panel as it is.
    pub fn select(&mut self, key: &str) -> bool {
        match self.catalog.get(key) {
            Some(entry) if self.selected.map(|s| s.key) != Some(entry.key) => {
                self.selected = Some(entry);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&'static ContentEntry> {
        self.selected
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.selected.map(|entry| entry.key) == Some(key)
    }

    pub fn catalog(&self) -> ContentCatalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[ContentEntry] = &[
        ContentEntry { key: "inputs", title: "Inputs", text: "PRDs and designs" },
        ContentEntry { key: "spec", title: "Spec", text: "The plan" },
    ];

    #[test]
    fn starts_with_nothing_selected() {
        let panel = ContentPanel::new(ContentCatalog::new(ENTRIES));
        assert_eq!(panel.selected(), None);
        assert!(!panel.is_active("inputs"));
    }

    #[test]
    fn selecting_swaps_the_details() {
        let mut panel = ContentPanel::new(ContentCatalog::new(ENTRIES));
        assert!(panel.select("spec"));
        assert_eq!(panel.selected().map(|e| e.title), Some("Spec"));
        assert!(panel.select("inputs"));
        assert!(panel.is_active("inputs"));
        assert!(!panel.is_active("spec"));
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut panel = ContentPanel::new(ContentCatalog::new(ENTRIES));
        panel.select("spec");
        let before = panel.clone();
        assert!(!panel.select("spec"));
        assert_eq!(panel, before);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut panel = ContentPanel::new(ContentCatalog::new(ENTRIES));
        panel.select("inputs");
        assert!(!panel.select("deploy"));
        assert!(panel.is_active("inputs"));
    }
}
