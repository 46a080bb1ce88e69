/// `?page=` query parameter. Anything that is not an integer counts as page 1.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Read `page` from a raw query string. The first occurrence wins and
    /// other keys are ignored, so no query string is ever rejected.
    pub fn from_query(raw: Option<&str>) -> Self {
        let page = raw.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.into_owned())
        });
        Self { page }
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Return the one-indexed `page` of `size` items. Out-of-range pages are empty.
pub fn paginate<T>(items: Vec<T>, page: i64, size: usize) -> Vec<T> {
    let Some(skipped_pages) = page.checked_sub(1).and_then(|p| usize::try_from(p).ok()) else {
        return Vec::new();
    };
    let start = skipped_pages.saturating_mul(size);

    items.into_iter().skip(start).take(size).collect()
}
