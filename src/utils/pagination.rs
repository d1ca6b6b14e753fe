/// Fixed page size for every paginated listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns page `page` (1-indexed) of `items`: offsets `(page-1)*10 ..= (page-1)*10+9`.
///
/// A page past the end, or `page < 1`, yields an empty vector. Callers decide
/// whether an empty page is an error.
pub fn paginate<T, I>(page: i64, items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let Some(start) = usize::try_from(page)
        .ok()
        .and_then(|p| p.checked_sub(1))
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

/// Collection length as the `i64` totals carried in responses.
pub fn total_count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
