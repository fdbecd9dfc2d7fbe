use passin_api::types::{Credentials, NewAttendee, NewEvent};
use passin_api::{AttendeeQuery, Client, EventQuery, Query};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_attendees_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("attendees.json");

    Mock::given(method("GET"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_attendees(&AttendeeQuery::default()).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.total, 25);
    assert_eq!(resp.items[0].name, "Ana Souza");
    assert!(resp.items[1].checked_in_at.is_none());
}

#[tokio::test]
async fn get_attendees_sends_page_index_and_query() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("attendees.json");

    // page 3 goes out as the 0-indexed pageIndex=2
    Mock::given(method("GET"))
        .and(path("/attendees"))
        .and(query_param("pageIndex", "2"))
        .and(query_param("query", "ana"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = AttendeeQuery::default().with_page(3).with_search("ana");
    let result = client.get_attendees(&query).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_attendees_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_attendees(&AttendeeQuery::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn get_attendees_oversized_multibyte_error_body() {
    let mock_server = MockServer::start().await;

    // An error body longer than the diagnostic snippet limit, with a
    // multibyte character straddling the cutoff. Must come back as an
    // HttpStatus error, not abort while truncating.
    let body = format!("{}é: credenciais inválidas", "a".repeat(1999));
    Mock::given(method("GET"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_attendees(&AttendeeQuery::default()).await;
    match result {
        Err(passin_api::Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn get_attendees_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_attendees(&AttendeeQuery::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn get_events_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("events.json");

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_events(&EventQuery::default()).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.items.len(), 1);
    assert_eq!(resp.items[0].slug, "unite-summit");
}

#[tokio::test]
async fn login_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("auth.json");

    let credentials = Credentials {
        cpf: "12345678909".to_string(),
        senha: "s3nh4".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(&credentials))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.login(&credentials).await;
    assert!(result.is_ok());

    let payload = result.unwrap();
    assert_eq!(payload.token, "eyJhbGciOiJIUzI1NiJ9.test-token");
    assert_eq!(payload.user.nome_completo, "Ana Clara Souza");
}

#[tokio::test]
async fn login_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"msg\":\"credenciais inválidas\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let credentials = Credentials {
        cpf: "12345678909".to_string(),
        senha: "wrong".to_string(),
    };
    let result = client.login(&credentials).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn create_attendee_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"attendeeId\":\"12893\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let attendee = NewAttendee {
        name: "Carla Dias".to_string(),
        email: "carla.dias@example.com".to_string(),
    };
    assert!(client.create_attendee(&attendee).await.is_ok());
}

#[tokio::test]
async fn create_attendee_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/attendees"))
        .respond_with(ResponseTemplate::new(409).set_body_string("{\"message\":\"e-mail already registered\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let attendee = NewAttendee {
        name: "Carla Dias".to_string(),
        email: "carla.dias@example.com".to_string(),
    };
    assert!(client.create_attendee(&attendee).await.is_err());
}

#[tokio::test]
async fn create_event_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"eventId\":\"e-001\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let event = NewEvent {
        title: "Unite Summit".to_string(),
        details: "Evento para devs".to_string(),
        maximum_attendees: 120,
    };
    assert!(client.create_event(&event).await.is_ok());
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("attendees.json");

    Mock::given(method("GET"))
        .and(path("/attendees"))
        .and(wiremock::matchers::header(
            "Authorization",
            "Bearer test-token",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).with_token("test-token");
    let result = client.get_attendees(&AttendeeQuery::default()).await;
    assert!(result.is_ok());
}
