use url::Url;

use super::{common::ListQueryCommon, Query};

/// Query for the paginated `/attendees` listing.
#[derive(Default, Clone, Debug)]
pub struct AttendeeQuery {
    pub common: ListQueryCommon,
}

impl Query for AttendeeQuery {
    fn get_common(&mut self) -> &mut ListQueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
