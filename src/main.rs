use lighter_users::{Server, config, observability};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;

    observability::init(&config.observability);

    let server = Server::new(config).await?;

    server.run().await?;

    Ok(())
}
