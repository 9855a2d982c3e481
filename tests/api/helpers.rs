use once_cell::sync::Lazy;
use reqwest::Client;
use secure_sdlc_demo::configuration::get_configuration;
use secure_sdlc_demo::startup::Application;
use secure_sdlc_demo::telemetry::setup_tracing;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        setup_tracing("test", default_filter, std::io::stdout);
    } else {
        setup_tracing("test", default_filter, std::io::sink);
    }
});

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub async fn get_index(&self) -> reqwest::Response {
        self.client
            .get(&format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_greet(&self, query: Option<&str>) -> reqwest::Response {
        let url = match query {
            Some(query) => format!("{}/greet?{}", &self.address, query),
            None => format!("{}/greet", &self.address),
        };
        self.client
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn greet_with_name(&self, name: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}/greet", &self.address))
            .query(&[("name", name)])
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c
    };
    let application = Application::build(configuration)
        .await
        .expect("Failed to build app.");
    let address = format!("http://127.0.0.1:{}", application.port());
    tokio::spawn(application.run_until_stopped());
    TestApp {
        address,
        client: Client::new(),
    }
}
