#![allow(dead_code)]

use serde_json::Value;
use std::net::TcpListener;
use std::path::PathBuf;
use storefront::configuration::{Settings, StorageSettings};
use storefront::telemetry::{get_subscriber, init_subscriber};
use tempfile::TempDir;

// TEST_LOG=1 cargo test  prints the server's bunyan output
lazy_static::lazy_static! {
    static ref TRACING: () = {
        let level = "debug".to_string();
        let name = "test".to_string();
        if std::env::var("TEST_LOG").is_ok() {
            init_subscriber(get_subscriber(name, level, std::io::stdout));
        } else {
            init_subscriber(get_subscriber(name, level, std::io::sink));
        }
    };
}

pub struct TestApp {
    pub address: String,
    pub users_file: PathBuf,
    pub products_file: PathBuf,
    // keeps the store files alive for the lifetime of the test
    _dir: TempDir,
}

impl TestApp {
    pub fn seed_products(&self, products: Value) {
        std::fs::write(
            &self.products_file,
            serde_json::to_string_pretty(&products).unwrap(),
        )
        .expect("Failed to seed products");
    }

    pub fn products_on_disk(&self) -> String {
        std::fs::read_to_string(&self.products_file).expect("Failed to read products")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub async fn spawn_app() -> TestApp {
    lazy_static::initialize(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let users_file = dir.path().join("users.json");
    let products_file = dir.path().join("product.json");

    let settings = Settings {
        app_port: port,
        app_host: "127.0.0.1".to_string(),
        storage: StorageSettings {
            users_file: users_file.clone(),
            products_file: products_file.clone(),
        },
    };

    let server = storefront::startup::run(listener, settings).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        users_file,
        products_file,
        _dir: dir,
    }
}
