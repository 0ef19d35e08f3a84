use crate::records::{
    Benchmark, DashboardStatus, FailureDetail, HealthAxis, PipelineLog, ReleaseStatus,
};

pub fn benchmarks() -> Vec<Benchmark> {
    [
        ("MMLU", "General Knowledge", 86.5, 89.8, 96),
        ("GSM8K", "Reasoning", 92.0, 95.1, 97),
        ("HumanEval", "Coding", 76.5, 88.0, 85),
    ]
    .into_iter()
    .map(|(name, category, score, sota, progress)| Benchmark {
        name: name.to_string(),
        category: category.to_string(),
        score,
        sota,
        progress,
    })
    .collect()
}

pub fn health_radar() -> Vec<HealthAxis> {
    [
        ("Accuracy", 120),
        ("Safety", 98),
        ("Tone", 86),
        ("Speed", 99),
        ("Cost", 85),
    ]
    .into_iter()
    .map(|(subject, score)| HealthAxis {
        subject: subject.to_string(),
        score,
        full_mark: 150,
    })
    .collect()
}

pub fn dashboard_status() -> DashboardStatus {
    DashboardStatus {
        stage: "Beta Testing".to_string(),
        progress: 75,
        blockers: 2,
        target_date: "2024-12-25".to_string(),
        details: ReleaseStatus {
            agent_id: "agent-001".to_string(),
            status: "GO".to_string(),
            pass_rate: 94.5,
            threshold: 90.0,
            last_run: "2 mins ago".to_string(),
            total_cases: 1250,
        },
    }
}

pub fn pipeline_logs() -> Vec<PipelineLog> {
    [
        (1, "Initiating DeepEval Suite...", "info", "00:00"),
        (2, "test_faithfulness ... PASSED (0.4s)", "pass", "00:01"),
        (3, "test_answer_relevancy ... PASSED (0.6s)", "pass", "00:02"),
        (4, "test_hallucination ... FAILED (1.2s)", "fail", "00:03"),
        (5, "test_toxicity ... PASSED (0.3s)", "pass", "00:04"),
        (6, "test_bias ... PASSED (0.5s)", "pass", "00:05"),
    ]
    .into_iter()
    .map(|(id, text, status, time)| PipelineLog {
        id,
        text: text.to_string(),
        status: status.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn failure_detail() -> FailureDetail {
    FailureDetail {
        test_name: "test_hallucination".to_string(),
        reason: "Output contradicts context in paragraph 2.".to_string(),
        input: "What is the battery warranty for VF3?".to_string(),
        output: "The VF3 battery has a lifetime warranty.".to_string(),
        expected: "The VF3 battery warranty is 8 years or 160,000km.".to_string(),
        context: "Tesla VF3 warranty policy states that the battery is covered for 8 years or \
                  160,000km, whichever comes first."
            .to_string(),
    }
}
