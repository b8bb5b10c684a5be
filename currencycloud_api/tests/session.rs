use currencycloud_api::{Client, Credentials, Error};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

const TOKEN: &str = "4df5b3e5882a412f148dcd08fa4e5b73";

const EXPIRED_SESSION: &str = r#"{
    "error_code": "auth_failed",
    "error_messages": {
        "username": [
            {
                "code": "invalid_supplied_credentials",
                "message": "Authentication failed with the supplied credentials",
                "params": {}
            }
        ]
    }
}"#;

fn client(server: &MockServer) -> Client {
    Client::with_base_url(
        &server.uri(),
        Credentials::new("development@currencycloud.com", "deadbeefdeadbeef"),
    )
    .unwrap()
}

#[tokio::test]
async fn logs_in_lazily_and_attaches_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/api"))
        .and(body_string_contains("login_id=development%40currencycloud.com"))
        .and(body_string_contains("api_key=deadbeefdeadbeef"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("authenticate.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts/current"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("account.json")))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);

    // Two calls, one login: the token is cached after the first request.
    client.current_account().await.unwrap();
    client.current_account().await.unwrap();
}

#[tokio::test]
async fn reauthenticates_and_replays_on_expired_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("authenticate.json")),
        )
        .expect(2)
        .mount(&server)
        .await;

    // First attempt is rejected as expired, the replay succeeds.
    Mock::given(method("GET"))
        .and(path("/v2/accounts/current"))
        .respond_with(ResponseTemplate::new(401).set_body_string(EXPIRED_SESSION))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("account.json")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let account = client.current_account().await.unwrap();
    assert_eq!(account.account_name, "Currencycloud Development");
}

#[tokio::test]
async fn second_rejection_surfaces_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("authenticate.json")),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts/current"))
        .respond_with(ResponseTemplate::new(401).set_body_string(EXPIRED_SESSION))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.current_account().await;

    let Err(Error::AuthenticationFailed(detail)) = result else {
        panic!("expected AuthenticationFailed");
    };
    assert_eq!(detail.error_code.as_deref(), Some("auth_failed"));
}

#[tokio::test]
async fn failed_login_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/api"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(
                r#"{"error_code": "auth_invalid_user_login_details", "error_messages": {}}"#,
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let result = client.current_account().await;

    assert!(matches!(result, Err(Error::AuthenticationFailed(_))));
}

#[tokio::test]
async fn close_session_posts_token_and_forgets_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("authenticate.json")),
        )
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/accounts/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("account.json")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/close_session"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.current_account().await.unwrap();
    client.close_session().await.unwrap();

    // The next request has no token and must log in again.
    client.current_account().await.unwrap();
}

#[tokio::test]
async fn close_session_without_login_is_a_noop() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/authenticate/close_session"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    client.close_session().await.unwrap();
}
