use catalog_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Catalog server starting..."
    );

    // 2. 打开数据库并启动 HTTP 服务器
    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
