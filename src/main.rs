use anyhow::Context;
use clap::Parser;
use pedidos_client::utils::{logger, validation::Validate};
use pedidos_client::{CliConfig, Command, Order, OrdersApi, OrdersClient};

async fn run_command<A: OrdersApi>(api: &A, command: &Command) -> pedidos_client::Result<Order> {
    match command {
        Command::List => api.list_orders().await,
        Command::Get { id } => api.get_order(id).await,
        Command::Create { data } => api.create_order(data).await,
        Command::Update { id, data } => api.update_order(id, data).await,
        Command::Delete { id } => api.delete_order(id).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.client_config().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let client = OrdersClient::new(&config)?;
    let result = run_command(&client, &cli.command).await.map_err(|e| {
        tracing::error!("❌ {:?} failed: {}", cli.command, e);
        e
    })?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
