use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Benchmark {
    pub name: String,
    pub category: String,
    pub score: f64,
    pub sota: f64,
    pub progress: u32,
}

/// 模型注册表条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelEntry {
    pub id: u32,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commit {
    pub id: u32,
    pub message: String,
    pub time: String,
    pub author: String,
}

/// 测试数据集生成记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetJob {
    pub id: u32,
    pub date: String,
    pub topic: String,
    pub quantity: u32,
    pub status: String,
}

/// 健康雷达图的一个维度
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAxis {
    pub subject: String,
    #[serde(rename = "A")]
    pub score: u32,
    #[serde(rename = "fullMark")]
    pub full_mark: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseStatus {
    pub agent_id: String,
    pub status: String,
    pub pass_rate: f64,
    pub threshold: f64,
    pub last_run: String,
    pub total_cases: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStatus {
    pub stage: String,
    pub progress: u32,
    pub blockers: u32,
    pub target_date: String,
    pub details: ReleaseStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineLog {
    pub id: u32,
    pub text: String,
    pub status: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetail {
    pub test_name: String,
    pub reason: String,
    pub input: String,
    pub output: String,
    pub expected: String,
    pub context: String,
}

/// 等待人工评分的低置信度回答
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: u32,
    pub query: String,
    pub response: String,
    pub confidence: f64,
    pub timestamp: String,
    pub agent_id: String,
    pub agent_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub status: String,
    pub repo_url: String,
    pub webhook_url: String,
    pub secret_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    pub id: String,
    pub name: String,
    pub doc_count: u32,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 评测指标定义
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub enabled: bool,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    pub name: String,
    pub href: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}
