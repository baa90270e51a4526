use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Categories keyed by id, in ascending id order
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryListDto {
    /// Category type labels keyed by category id
    #[schema(value_type = Object, example = json!({"1": "Science", "4": "History"}))]
    pub categories: CategoryMap,
    pub total_categories: usize,
}
