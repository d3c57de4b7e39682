//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item (菜品)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Price in whole euros
    pub price: u32,
}

/// Menu category (菜单分类: entrées, plats, desserts, boissons)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

/// Full menu, categories in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
}
