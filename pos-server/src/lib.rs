//! POS Server - 餐厅点餐收银后端
//!
//! # 架构概述
//!
//! - **菜单** (`catalog`): 分类和菜品，只读参考数据
//! - **数据仓库** (`store`): 桌台、购物车、订单，一把锁保护的内存状态
//! - **HTTP API** (`api`): JSON 接口
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── catalog/       # 菜单与初始化数据
//! ├── store/         # 桌台、购物车、订单
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由与中间件组装
//! ├── middleware/    # 访问日志
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod middleware;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::catalog::{Catalog, SeedData};
pub use crate::core::{Config, Server, ServerState};
pub use crate::services::build_router;
pub use crate::store::{PosStore, StoreError};
pub use crate::utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use crate::utils::logger::init_logger_with_file;

/// 加载 `.env`、读取配置并初始化日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
    "#
    );
}
