//! 固定的模拟数据。
//!
//! 每个函数每次调用都返回内容相同的新副本，处理器可以直接序列化。

mod activity;
mod dashboard;
mod navigation;
mod registry;
mod scenario;
mod traces;

pub use activity::{battle_campaigns, commits, dataset_history, review_queue};
pub use dashboard::{benchmarks, dashboard_status, failure_detail, health_radar, pipeline_logs};
pub use navigation::nav_groups;
pub use registry::{agents, knowledge_bases, metrics, models, team};
pub use scenario::{default_scenario_graph, scenario_detail};
pub use traces::{trace_detail, traces};
