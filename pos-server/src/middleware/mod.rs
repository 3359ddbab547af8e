//! HTTP 中间件

pub mod logging;
pub mod options;

pub use logging::logging_middleware;
pub use options::options_no_content;
