use std::fmt;

/// The four screens, in the order the flow walks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    Proposal,
    Verify,
    Gallery,
    Final,
}

impl Page {
    /// Resolves a page identity once at start-up.
    ///
    /// Accepts a document-style path (`index.html`, `gallery.html`, a path whose
    /// last segment is one of those, or an empty path for the landing page) or
    /// a short name. Anything else is unknown.
    pub(crate) fn resolve(identity: &str) -> Option<Page> {
        let last = identity.trim().rsplit('/').next().unwrap_or_default();
        match last.to_ascii_lowercase().as_str() {
            "" | "index.html" | "index" | "proposal" => Some(Page::Proposal),
            "verify.html" | "verify" => Some(Page::Verify),
            "gallery.html" | "gallery" => Some(Page::Gallery),
            "final.html" | "final" => Some(Page::Final),
            _ => None,
        }
    }

    pub(crate) fn path(self) -> &'static str {
        match self {
            Page::Proposal => "index.html",
            Page::Verify => "verify.html",
            Page::Gallery => "gallery.html",
            Page::Final => "final.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_paths_and_names() {
        assert_eq!(Page::resolve(""), Some(Page::Proposal));
        assert_eq!(Page::resolve("/"), Some(Page::Proposal));
        assert_eq!(Page::resolve("index.html"), Some(Page::Proposal));
        assert_eq!(Page::resolve("/site/love/verify.html"), Some(Page::Verify));
        assert_eq!(Page::resolve("Gallery"), Some(Page::Gallery));
        assert_eq!(Page::resolve("final.html"), Some(Page::Final));
        assert_eq!(Page::resolve("about.html"), None);
    }

    #[test]
    fn path_resolves_back_to_the_same_page() {
        for p in [Page::Proposal, Page::Verify, Page::Gallery, Page::Final] {
            assert_eq!(Page::resolve(p.path()), Some(p));
        }
    }
}
