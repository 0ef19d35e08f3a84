use axum::{extract::Query, Json};
use langeval_domain::{fixtures, Campaign, Commit, DatasetJob, Page, ReviewItem};
use serde::Deserialize;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 100;

/// 分页查询参数；空值或非数字按默认值处理
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PageParams {
    /// 页码至少为 1，每页条数限制在 1..=100
    pub fn resolve(&self) -> (u64, u64) {
        let page = parse_or(self.page.as_deref(), DEFAULT_PAGE).max(1);
        let size = parse_or(self.size.as_deref(), DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }
}

fn parse_or(raw: Option<&str>, default: u64) -> u64 {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

pub async fn list_dataset_history() -> Json<Vec<DatasetJob>> {
    Json(fixtures::dataset_history())
}

pub async fn list_commits() -> Json<Vec<Commit>> {
    Json(fixtures::commits())
}

/// 人工评审队列
pub async fn list_review_queue() -> Json<Vec<ReviewItem>> {
    Json(fixtures::review_queue())
}

pub async fn list_campaigns(Query(params): Query<PageParams>) -> Json<Page<Campaign>> {
    let (page, size) = params.resolve();
    Json(Page::slice(&fixtures::battle_campaigns(), page, size))
}
