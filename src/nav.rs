#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }

    /// Id of the section the link points at (`#flow` -> `flow`).
    pub fn target(&self) -> &'static str {
        self.href.strip_prefix('#').unwrap_or(self.href)
    }
}

/// Tracks which nav link matches the section currently in view.
#[derive(Clone, Debug, PartialEq)]
pub struct NavHighlighter {
    links: &'static [NavLink],
    threshold: f64,
    active: Option<&'static str>,
}

impl NavHighlighter {
    pub fn new(links: &'static [NavLink], threshold: f64) -> Self {
        Self {
            links,
            threshold,
            active: None,
        }
    }

    /// Handles one visibility report for a section. Returns whether the
    /// active link changed.
    ///
    /// A section that came into view with no matching link clears the
    /// highlight; reports of sections leaving the view change nothing.
    pub fn observe(&mut self, section_id: &str, ratio: f64, is_intersecting: bool) -> bool {
        if !is_intersecting || ratio < self.threshold {
            return false;
        }
        let next = self
            .links
            .iter()
            .find(|link| link.target() == section_id)
            .map(|link| link.href);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active == Some(link.href)
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKS: &[NavLink] = &[
        NavLink::new("#intro", "Introduction"),
        NavLink::new("#flow", "Workflow"),
    ];

    #[test]
    fn visible_section_activates_its_link() {
        let mut nav = NavHighlighter::new(LINKS, 0.4);
        assert!(nav.observe("flow", 0.5, true));
        assert_eq!(nav.active(), Some("#flow"));
        assert!(nav.is_active(&LINKS[1]));
        assert!(!nav.is_active(&LINKS[0]));
    }

    #[test]
    fn below_threshold_or_leaving_changes_nothing() {
        let mut nav = NavHighlighter::new(LINKS, 0.4);
        nav.observe("intro", 1.0, true);
        assert!(!nav.observe("flow", 0.1, true));
        assert!(!nav.observe("flow", 0.9, false));
        assert_eq!(nav.active(), Some("#intro"));
    }

    #[test]
    fn repeated_observation_is_idempotent() {
        let mut nav = NavHighlighter::new(LINKS, 0.4);
        nav.observe("flow", 0.6, true);
        let before = nav.clone();
        assert!(!nav.observe("flow", 0.8, true));
        assert_eq!(nav, before);
    }

    #[test]
    fn unmatched_section_clears_highlight() {
        let mut nav = NavHighlighter::new(LINKS, 0.4);
        nav.observe("intro", 1.0, true);
        assert!(nav.observe("footer", 1.0, true));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn target_strips_the_hash() {
        assert_eq!(LINKS[1].target(), "flow");
        assert_eq!(NavLink::new("plain", "Plain").target(), "plain");
    }
}
