//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查和一致性自检
//! - [`categories`] - 菜品分类
//! - [`dishes`] - 菜品
//! - [`tables`] - 桌台 (开台、清台、当前订单)
//! - [`cart`] - 购物车
//! - [`orders`] - 订单、账单、结账

pub mod convert;

pub mod health;

pub mod cart;
pub mod categories;
pub mod dishes;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
