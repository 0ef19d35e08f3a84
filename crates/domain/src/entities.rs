use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 对战模式
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignMode {
    /// 模拟器攻击目标 Agent
    Adversarial,
    /// 两个 Agent 同题比较
    Comparison,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Running,
    Completed,
    Failed,
    Queued,
}

/// Battle Arena 中记录的一次评测对战。
///
/// 仅为数据形状：`current_turn <= max_turns` 由数据来源保证，这里不做校验。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub mode: CampaignMode,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    // adversarial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_sum: Option<f64>,

    // comparison
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_a_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_b_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_a_wins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_b_wins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,

    pub current_turn: u32,
    pub max_turns: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
}

impl Campaign {
    /// 以百分比表示的轮次进度，最大 100；`max_turns` 为 0 时返回 0
    pub fn progress(&self) -> u32 {
        if self.max_turns == 0 {
            return 0;
        }
        (self.current_turn.saturating_mul(100) / self.max_turns).min(100)
    }

    /// 填充 `progress` 字段
    pub fn with_progress(mut self) -> Self {
        self.progress = Some(self.progress());
        self
    }
}
