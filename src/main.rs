use std::net::TcpListener;
use storefront::configuration::get_configuration;
use storefront::startup::run;
use storefront::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("storefront".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(
        users_file = %settings.storage.users_file.display(),
        products_file = %settings.storage.products_file.display(),
        "Using JSON file storage"
    );

    let address = settings.address();
    tracing::info!("Start server at http://{}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|_| panic!("failed to bind to {}", settings.app_port));

    run(listener, settings)?.await
}
