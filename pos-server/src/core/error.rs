use thiserror::Error;

use crate::catalog::SeedError;

/// 启动错误 - 唯一的致命路径
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("初始化数据加载失败: {0}")]
    Seed(#[from] SeedError),

    #[error("无法监听 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
