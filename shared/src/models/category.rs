//! Category Model

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// Menu category (热菜 / 凉菜 / 饮料 ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
