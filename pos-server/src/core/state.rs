//! Server State
//!
//! 服务器共享状态，所有 handler 通过 axum `State` 访问

use std::time::Instant;

use crate::catalog::{Catalog, SeedData};
use crate::core::{Config, Result};
use crate::store::PosStore;

/// 服务器状态 - 持有配置和内存数据仓库
///
/// Clone 只复制引用，所有克隆共享同一份数据
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 桌台、购物车、订单 (内含菜单)
    pub store: PosStore,
    /// 启动时间，用于健康检查
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, store: PosStore) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 有 `SEED_FILE` 时从文件加载菜单和桌台，否则使用内置数据
    pub fn initialize(config: &Config) -> Result<Self> {
        let seed = match &config.seed_file {
            Some(path) => SeedData::load(path)?,
            None => {
                tracing::info!("No seed file configured, using built-in menu");
                let seed = SeedData::default();
                seed.validate()?;
                seed
            }
        };

        let store = PosStore::from_seed(&seed);
        tracing::info!(
            categories = seed.categories.len(),
            dishes = seed.dishes.len(),
            tables = seed.tables.len(),
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), store))
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    /// 运行时长 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
