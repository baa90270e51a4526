use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Returns the `page`-th window (1-indexed) of `items`.
///
/// Pages below 1 or past the end yield an empty slice; callers decide
/// whether that is an error.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));

    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
