use acctview::client::http::Client;
use acctview::config::{Config, Initializer};
use acctview::navigator::TerminalNavigator;
use acctview::AccountView;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION: &str = "3c1d0f6e-session";

pub type TestView = AccountView<Client, TerminalNavigator<Vec<u8>>>;

pub fn view(base_url: String) -> TestView {
    let mut config = Config::default();
    config.set_base_url(&mut Some(base_url));
    config.set_session(&mut Some(SESSION.to_owned()));

    Initializer::from_config(config)
        .build_view(TerminalNavigator::new(Vec::new()))
        .unwrap()
}

pub fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "id": "8a6e0804-2bd0-4672-b79d-d97027f9071a",
        "email": "a@b.com",
        "identities": [
            {
                "id": "0b1f3f5e-2f55-4d3a-9a59-3c1f2b1c9e01",
                "identityProviderId": "google",
                "externalId": "123",
                "mostRecentIdToken": {
                    "iss": "https://accounts.google.com",
                    "sub": "123",
                    "email": "a@b.com"
                }
            },
            {
                "id": "0b1f3f5e-2f55-4d3a-9a59-3c1f2b1c9e02",
                "identityProviderId": "github",
                "externalId": "4567",
                "mostRecentIdToken": { "email": "a@users.github.example" }
            }
        ]
    })
}

/// Answer GET /private/api/me for the test session only.
pub async fn mount_me(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/private/api/me"))
        .and(header("cookie", format!("session_id={}", SESSION).as_str()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub fn rendered(view: &TestView) -> String {
    let mut buf = Vec::new();
    view.render(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
