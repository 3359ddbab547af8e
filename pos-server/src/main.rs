use pos_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();
    tracing::info!(environment = %config.environment, "🦀 POS server starting...");

    // 2. 加载菜单和桌台
    let state = ServerState::initialize(&config).inspect_err(|e| {
        tracing::error!("Startup failed: {}", e);
    })?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
