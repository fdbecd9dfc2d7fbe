use url::Url;

use super::{common::ListQueryCommon, Query};

/// Query for the paginated `/events` listing.
#[derive(Default, Clone, Debug)]
pub struct EventQuery {
    pub common: ListQueryCommon,
}

impl Query for EventQuery {
    fn get_common(&mut self) -> &mut ListQueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{EventQuery, Query};

    #[test]
    fn test_event_query() {
        let url = Url::parse("https://example.com/events").unwrap();

        assert_eq!(
            EventQuery::default().add_to_url(&url).to_string(),
            "https://example.com/events?pageIndex=0"
        );

        assert_eq!(
            EventQuery::default()
                .with_page(2)
                .with_search("unite")
                .add_to_url(&url)
                .to_string(),
            "https://example.com/events?pageIndex=1&query=unite"
        );
    }
}
