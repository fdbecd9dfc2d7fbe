use passin_api::types::{
    Attendee, AttendeeListResponse, AuthPayload, Event, EventListResponse, ListResult,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_attendees_full() {
    let json = load_fixture("attendees.json");
    let body: AttendeeListResponse = serde_json::from_str(&json).unwrap();
    let resp: ListResult<Attendee> = body.into();

    assert_eq!(resp.total, 25);
    assert_eq!(resp.items.len(), 2);

    let attendee = &resp.items[0];
    assert_eq!(attendee.id, "12891");
    assert_eq!(attendee.name, "Ana Souza");
    assert_eq!(attendee.email, "ana.souza@example.com");
    assert!(attendee.checked_in_at.is_some());

    assert!(resp.items[1].checked_in_at.is_none());
}

#[test]
fn deserialize_events_full() {
    let json = load_fixture("events.json");
    let body: EventListResponse = serde_json::from_str(&json).unwrap();
    let resp: ListResult<Event> = body.into();

    assert_eq!(resp.total, 1);
    let event = &resp.items[0];
    assert_eq!(event.id, "627cb110-5c68-4c90-8ff1-f3cce15d606e");
    assert_eq!(event.title, "Unite Summit");
    assert_eq!(event.slug, "unite-summit");
    assert_eq!(event.maximum_attendees, 120);
    assert_eq!(event.attendees_amount, 25);
}

#[test]
fn deserialize_attendees_missing_fields_default_to_empty_page() {
    let body: AttendeeListResponse = serde_json::from_str("{}").unwrap();
    let resp: ListResult<Attendee> = body.into();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn deserialize_auth_payload() {
    let json = load_fixture("auth.json");
    let payload: AuthPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(payload.token, "eyJhbGciOiJIUzI1NiJ9.test-token");
    assert_eq!(payload.user.cpf, "12345678909");
    assert_eq!(payload.user.aceitou_termos, Some(true));
    assert_eq!(payload.msg.as_deref(), Some("login efetuado com sucesso"));
}
