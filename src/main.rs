use workflow_example::{config::Config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    telemetry::init_tracing();

    // Load configuration
    let config = Config::backend()?;

    let listener = server::bind(&config).await?;
    server::serve(listener, server::backend_router()).await
}
