/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `quiz_category.type` sent by the front-end when "ALL" is selected
pub const ALL_CATEGORIES_TYPE: &str = "click";
