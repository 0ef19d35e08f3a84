pub mod activity;
pub mod dashboard;
pub mod docs;
pub mod health;
pub mod i18n;
pub mod pages;
pub mod registry;
pub mod resources;

use std::time::Duration;

use crate::routes::AppState;

/// 模拟慢接口；关闭 `mock.simulate_latency` 时立即返回
pub(crate) async fn simulate_latency(state: &AppState, millis: u64) {
    if state.config.mock.simulate_latency {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
