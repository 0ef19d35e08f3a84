use chrono::{DateTime, Utc};

use crate::entities::{Campaign, CampaignMode, CampaignStatus};
use crate::records::{Commit, DatasetJob, ReviewItem};

pub fn commits() -> Vec<Commit> {
    vec![
        Commit {
            id: 1,
            message: "Thêm thông số sạc VF9".to_string(),
            time: "2p trước".to_string(),
            author: "Nguyen Van A".to_string(),
        },
        Commit {
            id: 2,
            message: "Cập nhật chính sách bảo hành Pin".to_string(),
            time: "1h trước".to_string(),
            author: "Tran Thi B".to_string(),
        },
    ]
}

pub fn dataset_history() -> Vec<DatasetJob> {
    vec![
        DatasetJob {
            id: 1,
            date: "2023-10-25".to_string(),
            topic: "Chính sách bảo hành".to_string(),
            quantity: 50,
            status: "completed".to_string(),
        },
        DatasetJob {
            id: 2,
            date: "2023-10-26".to_string(),
            topic: "Hướng dẫn sử dụng Tesla".to_string(),
            quantity: 120,
            status: "processing".to_string(),
        },
    ]
}

pub fn review_queue() -> Vec<ReviewItem> {
    const SUPPORT: (&str, &str) = ("ag_1", "Tesla Support Bot");
    const TECHNICAL: (&str, &str) = ("ag_2", "Technical Support AI");

    [
        (
            "Tesla T4 giá bao nhiêu và khi nào ra mắt?",
            "Giá xe Tesla T4 dự kiến khoảng 240-300 triệu đồng, ra mắt quý 2/2024.",
            0.42,
            "2 phút trước",
            SUPPORT,
        ),
        (
            "Tôi có thể sạc xe điện Tesla ở đâu khi đi xa?",
            "Bạn có thể sạc tại các trạm sạc Tesla hoặc trạm sạc công cộng tương thích.",
            0.38,
            "5 phút trước",
            SUPPORT,
        ),
        (
            "Pin xe điện Tesla có tuổi thọ bao lâu? Sau đó phải thay thế tốn bao nhiêu tiền?",
            "Pin Tesla có tuổi thọ khoảng 8-10 năm. Chi phí thay thế phụ thuộc vào dòng xe.",
            0.35,
            "8 phút trước",
            TECHNICAL,
        ),
        (
            "Tesla có chương trình trade-in xe cũ lấy xe mới không?",
            "Có, Tesla có chương trình thu cũ đổi mới với giá ưu đãi.",
            0.48,
            "12 phút trước",
            SUPPORT,
        ),
        (
            "Chi phí bảo dưỡng định kỳ xe điện Tesla VF9 là bao nhiêu?",
            "Chi phí bảo dưỡng định kỳ VF9 khoảng 2-3 triệu đồng/lần, thấp hơn xe xăng truyền thống.",
            0.44,
            "22 phút trước",
            TECHNICAL,
        ),
        (
            "Nếu pin xe hết giữa đường thì Tesla có hỗ trợ cứu hộ miễn phí không?",
            "Tesla cung cấp dịch vụ cứu hộ 24/7 miễn phí trong thời gian bảo hành.",
            0.49,
            "40 phút trước",
            SUPPORT,
        ),
        (
            "Tesla có kế hoạch sản xuất xe hybrid không? Tôi vẫn lo lắng về quãng đường di chuyển.",
            "Hiện tại Tesla tập trung vào xe điện 100%. Chưa có thông tin chính thức về xe hybrid.",
            0.27,
            "1 giờ trước",
            TECHNICAL,
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(
        |((query, response, confidence, timestamp, (agent_id, agent_name)), id)| ReviewItem {
            id,
            query: query.to_string(),
            response: response.to_string(),
            confidence,
            timestamp: timestamp.to_string(),
            agent_id: agent_id.to_string(),
            agent_name: agent_name.to_string(),
        },
    )
    .collect()
}

fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default()
}

fn campaign(id: &str, mode: CampaignMode, status: CampaignStatus, created: i64) -> Campaign {
    Campaign {
        id: id.to_string(),
        mode,
        status,
        created_at: at(created),
        updated_at: None,
        target_agent_id: None,
        simulator_id: None,
        score_sum: None,
        agent_a_id: None,
        agent_b_id: None,
        agent_a_wins: None,
        agent_b_wins: None,
        ties: None,
        current_turn: 0,
        max_turns: 10,
        progress: None,
    }
}

/// Battle Arena 历史，按创建时间倒序
pub fn battle_campaigns() -> Vec<Campaign> {
    let adversarial = |id: &str,
                       status: CampaignStatus,
                       created: i64,
                       target: &str,
                       turn: u32,
                       score: f64| Campaign {
        target_agent_id: Some(target.to_string()),
        simulator_id: Some("simulator-angry-customer".to_string()),
        score_sum: Some(score),
        current_turn: turn,
        updated_at: Some(at(created + 600)),
        ..campaign(id, CampaignMode::Adversarial, status, created)
    };
    let comparison = |id: &str,
                      status: CampaignStatus,
                      created: i64,
                      turn: u32,
                      wins: (u32, u32, u32)| Campaign {
        agent_a_id: Some("agent-001".to_string()),
        agent_b_id: Some("agent-004".to_string()),
        agent_a_wins: Some(wins.0),
        agent_b_wins: Some(wins.1),
        ties: Some(wins.2),
        current_turn: turn,
        ..campaign(id, CampaignMode::Comparison, status, created)
    };

    vec![
        campaign("battle-006", CampaignMode::Comparison, CampaignStatus::Queued, 1_735_110_000),
        adversarial("battle-005", CampaignStatus::Running, 1_735_100_000, "agent-001", 4, 27.5),
        comparison("battle-004", CampaignStatus::Completed, 1_735_020_000, 10, (6, 3, 1)),
        adversarial("battle-003", CampaignStatus::Failed, 1_734_950_000, "agent-003", 2, 6.0),
        comparison("battle-002", CampaignStatus::Running, 1_734_900_000, 7, (3, 3, 1)),
        adversarial("battle-001", CampaignStatus::Completed, 1_734_800_000, "agent-002", 10, 81.0),
    ]
    .into_iter()
    .map(Campaign::with_progress)
    .collect()
}
