use serde::{Deserialize, Serialize};

/// 分页信封
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, size: u64) -> Self {
        let pages = if size > 0 { total.div_ceil(size) } else { 0 };

        Self {
            items,
            total,
            page,
            size,
            pages,
        }
    }
}

impl<T: Clone> Page<T> {
    /// 从内存列表中截取第 `page` 页（从 1 开始）；越界页返回空列表
    pub fn slice(all: &[T], page: u64, size: u64) -> Self {
        let total = all.len() as u64;
        let items = if page == 0 || size == 0 {
            Vec::new()
        } else {
            let start = (page - 1).saturating_mul(size);
            all.iter()
                .skip(usize::try_from(start).unwrap_or(usize::MAX))
                .take(usize::try_from(size).unwrap_or(usize::MAX))
                .cloned()
                .collect()
        };

        Self::new(items, total, page, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page: Page<&str> = Page::new(vec!["a", "b", "c"], 10, 2, 3);

        assert_eq!(page.items, vec!["a", "b", "c"]);
        assert_eq!(page.total, 10);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 3);
        assert_eq!(page.pages, 4); // (10 + 3 - 1) / 3
    }

    #[test]
    fn test_page_zero_size() {
        let page: Page<&str> = Page::new(vec![], 2, 1, 0);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_page_empty() {
        let page: Page<&str> = Page::new(vec![], 0, 1, 10);
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_slice_middle_and_last_page() {
        let all: Vec<u32> = (1..=7).collect();

        let second = Page::slice(&all, 2, 3);
        assert_eq!(second.items, vec![4, 5, 6]);
        assert_eq!(second.total, 7);
        assert_eq!(second.pages, 3);

        let last = Page::slice(&all, 3, 3);
        assert_eq!(last.items, vec![7]);
    }

    #[test]
    fn test_slice_out_of_range() {
        let all: Vec<u32> = (1..=4).collect();

        assert!(Page::slice(&all, 5, 2).items.is_empty());
        assert!(Page::slice(&all, 0, 2).items.is_empty());
        assert_eq!(Page::slice(&all, 5, 2).pages, 2);
    }

    #[test]
    fn test_page_serialization() {
        let page: Page<&str> = Page::new(vec!["x", "y"], 5, 1, 2);
        let json = serde_json::to_string(&page).unwrap();

        assert!(json.contains("\"items\":[\"x\",\"y\"]"));
        assert!(json.contains("\"total\":5"));
        assert!(json.contains("\"size\":2"));
        assert!(json.contains("\"pages\":3"));
    }
}
