use anyhow::Context;
use greet_service::config::get_config;
use greet_service::startup::Application;
use greet_service::telem::{get_subscriber, init_subscriber};

#[actix_web::main] //needed to have an async runtime, because rust by default doesn't provide one
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("greet_service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config().context("failed to load config")?;
    let app = Application::build(config).context("failed to start the server")?;
    app.run_until_stopped().await?;
    Ok(())
}
