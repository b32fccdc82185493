//! Marks the navigation link of the current page.

use oxide_dom::{Document, Listeners};

use crate::behavior::{select_all, set_current, Behavior};

const NAME: &str = "active_menu";

#[derive(Debug, Default)]
pub struct ActiveMenu;

impl ActiveMenu {
    pub fn new() -> Self {
        Self
    }
}

/// Returns whether a link to `href` is current on `path`.
fn is_current(href: &str, path: &str) -> bool {
    let is_home = |p: &str| p == "/" || p == "/index.html";
    if is_home(href) && is_home(path) {
        return true;
    }
    href != "/" && path.contains(href)
}

impl Behavior for ActiveMenu {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, _listeners: &mut Listeners) {
        let path = doc.window.location.clone();
        for link in select_all(doc, ".nav-link") {
            let current = doc[link]
                .attr("href")
                .is_some_and(|href| is_current(href, &path));
            set_current(doc, link, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_dom::{NodeSpec, PageSpec};

    fn nav_page(path: &str) -> Document {
        let link = |href: &str| NodeSpec::new("a").class("nav-link").attr("href", href);
        Document::from_spec(
            &PageSpec::new(path).body(
                NodeSpec::new("nav")
                    .child(link("/").class("active"))
                    .child(link("/services.html"))
                    .child(link("/about.html")),
            ),
        )
    }

    fn active_hrefs(doc: &Document) -> Vec<String> {
        doc.query_selector_all(".nav-link.active")
            .unwrap()
            .into_iter()
            .map(|n| doc[n].attr("href").unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_home_link_on_home_page() {
        for path in ["/", "/index.html"] {
            let mut doc = nav_page(path);
            ActiveMenu::new().init(&mut doc, &mut Listeners::new());
            assert_eq!(active_hrefs(&doc), ["/"]);
        }
    }

    #[test]
    fn test_subpage_link() {
        let mut doc = nav_page("/services.html");
        ActiveMenu::new().init(&mut doc, &mut Listeners::new());
        assert_eq!(active_hrefs(&doc), ["/services.html"]);
        let link = doc.query_selector(".nav-link.active").unwrap().unwrap();
        assert_eq!(doc[link].attr("aria-current"), Some("page"));
    }

    #[test]
    fn test_unknown_page_clears_all() {
        let mut doc = nav_page("/imprint.html");
        ActiveMenu::new().init(&mut doc, &mut Listeners::new());
        assert!(active_hrefs(&doc).is_empty());
    }

    #[test]
    fn test_is_current() {
        assert!(is_current("/index.html", "/"));
        assert!(!is_current("/", "/about.html"));
        assert!(is_current("about", "/en/about.html"));
        assert!(!is_current("/", "/index"));
        assert!(!is_current("/index.html", "/index"));
    }

    #[test]
    fn test_extensionless_index_is_not_home() {
        let mut doc = nav_page("/index");
        ActiveMenu::new().init(&mut doc, &mut Listeners::new());
        assert!(active_hrefs(&doc).is_empty());
    }
}
