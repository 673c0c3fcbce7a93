use std::sync::Arc;

fn get_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
}

fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = ledgerd::config::AppConfig::load(&env);
    let _log_guard = ledgerd::logging::init_logging(&app_config);

    tracing::info!("Starting ledgerd in {} mode", env);

    let gateway_config = &app_config.gateway;
    let port = get_port_override().unwrap_or(gateway_config.port);

    println!(
        "Gateway will listen on {}:{}",
        gateway_config.host, port
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let db = ledgerd::Database::connect(&app_config.database.url).await?;
        db.create_schema().await?;

        let db = Arc::new(db);
        ledgerd::gateway::run_server(&gateway_config.host, port, db).await;
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
