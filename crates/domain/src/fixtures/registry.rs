use crate::records::{Agent, KnowledgeBase, MetricDefinition, ModelEntry, TeamMember};

pub fn models() -> Vec<ModelEntry> {
    [
        (1, "GPT-4 Turbo", "OpenAI", "API", "High"),
        (2, "Llama 3 Local", "VLLM", "Local", "Medium"),
        (3, "DeepSeek-V3", "DeepSeek", "API", "Low"),
    ]
    .into_iter()
    .map(|(id, name, provider, kind, usage)| ModelEntry {
        id,
        name: name.to_string(),
        provider: provider.to_string(),
        kind: kind.to_string(),
        status: "active".to_string(),
        usage: usage.to_string(),
    })
    .collect()
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "Nguyen Van A".to_string(),
            email: "a@example.com".to_string(),
            role: "ADMIN".to_string(),
            avatar: "/avatars/01.png".to_string(),
        },
        TeamMember {
            id: 2,
            name: "Tran Thi B".to_string(),
            email: "b@example.com".to_string(),
            role: "EDITOR".to_string(),
            avatar: "/avatars/02.png".to_string(),
        },
    ]
}

pub fn agents() -> Vec<Agent> {
    [
        ("agent-001", "Tesla CSKH Bot", "RAG Chatbot", "v2.4.0", "active", "vf-cskh-bot", "8x92"),
        (
            "agent-002",
            "Sentosa Resort Booking Assistant",
            "Task Agent",
            "v1.1.2",
            "active",
            "vp-booking-agent",
            "7y21",
        ),
        (
            "agent-003",
            "Marina Bay Sand Sales Consultant",
            "Sales Bot",
            "v0.9.5-beta",
            "maintenance",
            "vh-sales-bot",
            "9z44",
        ),
        (
            "agent-004",
            "Internal HR Policy Bot",
            "RAG Chatbot",
            "v3.0.1",
            "active",
            "hr-policy-bot",
            "2a11",
        ),
    ]
    .into_iter()
    .map(|(id, name, kind, version, status, repo, key)| Agent {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        version: version.to_string(),
        status: status.to_string(),
        repo_url: format!("https://gitlab.evaluation.ai/ai-projects/{repo}"),
        webhook_url: format!("https://eval.evaluation.ai/api/v1/webhook/{id}/trigger"),
        secret_key: format!("vf_eval_sk_{key}..."),
    })
    .collect()
}

pub fn knowledge_bases() -> Vec<KnowledgeBase> {
    [
        ("kb-001", "Tesla Owner Manual", 50, "synced", "pdf"),
        ("kb-002", "Sentosa Resort Booking Policy 2024", 12, "synced", "pdf"),
        ("kb-003", "Vietnamese Labor Law 2019", 150, "processing", "docx"),
        ("kb-004", "MIT Admission Guide", 5, "synced", "pdf"),
    ]
    .into_iter()
    .map(|(id, name, doc_count, status, kind)| KnowledgeBase {
        id: id.to_string(),
        name: name.to_string(),
        doc_count,
        status: status.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

pub fn metrics() -> Vec<MetricDefinition> {
    [
        ("faithfulness", "Faithfulness", "RAG", 0.7),
        ("toxicity", "Toxicity", "Safety", 0.1),
        ("answer_relevancy", "Answer Relevancy", "RAG", 0.6),
    ]
    .into_iter()
    .map(|(id, name, category, threshold)| MetricDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        enabled: true,
        threshold,
    })
    .collect()
}
