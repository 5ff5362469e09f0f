//! URL detection.
//!
//! Only links with an explicit scheme (`https://`, `http://`, `ftp://`, ...)
//! are recognised. E-mail addresses are not links.

use std::sync::LazyLock;

use linkify::{LinkFinder, LinkKind};

static FINDER: LazyLock<LinkFinder> = LazyLock::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

/// Number of URLs in `text`.
///
/// ```rust
/// use chatstat::analysis::count_links;
///
/// assert_eq!(count_links("see https://a.example and http://b.example/x?y=1"), 2);
/// assert_eq!(count_links("mail me at bob@example.com"), 0);
/// ```
pub fn count_links(text: &str) -> usize {
    FINDER.links(text).count()
}

/// Returns `true` if `token` contains a URL.
pub fn is_link(token: &str) -> bool {
    FINDER.links(token).next().is_some()
}
