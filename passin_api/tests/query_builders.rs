use passin_api::{AttendeeQuery, EventQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/attendees").unwrap()
}

#[test]
fn attendee_query_defaults_to_first_page() {
    let url = AttendeeQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("pageIndex=0"));
}

#[test]
fn attendee_query_page_is_zero_indexed_on_the_wire() {
    let url = AttendeeQuery::default().with_page(5).add_to_url(&base_url());
    assert_eq!(url.query(), Some("pageIndex=4"));
}

#[test]
fn attendee_query_search_is_url_encoded() {
    let url = AttendeeQuery::default()
        .with_search("ana souza")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("query=ana+souza"));
}

#[test]
fn attendee_query_empty_search_is_omitted() {
    let url = AttendeeQuery::default().with_search("").add_to_url(&base_url());
    assert_eq!(url.query(), Some("pageIndex=0"));
}

#[test]
fn event_query_carries_page_and_search() {
    let url = Url::parse("https://example.com/events").unwrap();
    let url = EventQuery::default()
        .with_page(2)
        .with_search("unite")
        .add_to_url(&url);
    let query = url.query().unwrap();
    assert!(query.contains("pageIndex=1"));
    assert!(query.contains("query=unite"));
}
