use once_cell::sync::Lazy;
use sqldaily::configuration::get_configuration;
use sqldaily::domain::Tip;
use sqldaily::startup::Application;
use std::path::PathBuf;
use telemetry::{get_subscriber, init_subscriber};
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub tips_path: PathBuf,
    pub subscribers_path: PathBuf,
}

impl TestApp {
    pub async fn post_subscriptions(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/subscriptions", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/login", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login_as_admin(&self) {
        let response = self
            .post_login(&serde_json::json!({
                "username": "admin",
                "password": "admin123"
            }))
            .await;
        assert_is_redirect_to(&response, "/admin/dashboard");
    }

    pub async fn get_login_html(&self) -> String {
        self.api_client
            .get(&format!("{}/login", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn get_admin_dashboard(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/admin/dashboard", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_admin_dashboard_html(&self) -> String {
        self.get_admin_dashboard().await.text().await.unwrap()
    }

    pub async fn post_daily_tip(&self, content: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/admin/tips", &self.address))
            .form(&serde_json::json!({ "content": content }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_tips_export(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/admin/tips", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/admin/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// What the automation would read from disk right now.
    pub fn stored_tips(&self) -> Vec<Tip> {
        match std::fs::read_to_string(&self.tips_path) {
            Ok(raw) => serde_json::from_str(&raw).expect("Stored tips are not valid JSON"),
            Err(_) => Vec::new(),
        }
    }

    pub fn stored_subscribers(&self) -> Vec<serde_json::Value> {
        match std::fs::read_to_string(&self.subscribers_path) {
            Ok(raw) => serde_json::from_str(&raw).expect("Stored subscribers are not valid JSON"),
            Err(_) => Vec::new(),
        }
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    // Randomise configuration to ensure test isolation
    let data_directory = std::env::temp_dir().join(format!("sqldaily-{}", Uuid::new_v4()));
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.application_port = 0;
        // Use fresh data files for each test case
        c.storage.tips_path = data_directory.join("daily_tips.json");
        c.storage.subscribers_path = data_directory.join("newsletter_subscribers.json");
        c
    };

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        port: application_port,
        api_client,
        tips_path: configuration.storage.tips_path,
        subscribers_path: configuration.storage.subscribers_path,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
