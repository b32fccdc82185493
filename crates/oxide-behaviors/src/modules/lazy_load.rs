//! Native lazy loading for media.

use oxide_dom::{Document, Listeners};
use tracing::debug;

use crate::behavior::{select_all, Behavior};

const NAME: &str = "lazy_load";

#[derive(Debug, Default)]
pub struct LazyLoad;

impl LazyLoad {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LazyLoad {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self, doc: &mut Document, _listeners: &mut Listeners) {
        let media = select_all(doc, "img:not([loading]), video:not([loading])");
        debug!(count = media.len(), "marking media lazy");
        for node in media {
            doc[node].set_attr("loading", "lazy");
        }
    }
}
