use crate::records::{NavGroup, NavItem};

type Item = (&'static str, &'static str, &'static str, &'static str);

const GROUPS: [(&str, &[Item]); 6] = [
    (
        "Documentation",
        &[(
            "Project Documentation",
            "/docs",
            "BookOpen",
            "System architecture & business requirements.",
        )],
    ),
    (
        "Executive View",
        &[
            (
                "Dashboard",
                "/dashboard",
                "LayoutDashboard",
                "Project health overview & Release decisions.",
            ),
            ("Reports", "/reports", "BarChart3", "Trend analysis & PDF reports."),
        ],
    ),
    (
        "Developer Tools",
        &[
            ("Dev Console", "/dev-console", "Terminal", "CI/CD Pipeline & Unit Test logs."),
            ("Trace Debugger", "/trace", "Activity", "Deep dive into LangChain execution."),
            ("Contribution", "/contribution", "GitBranch", "Contribute to Golden Dataset."),
        ],
    ),
    (
        "Evaluation",
        &[
            (
                "Scenario Builder",
                "/scenario-builder",
                "BrainCircuit",
                "Create test scenarios (No-code drag & drop).",
            ),
            ("Scenario History", "/campaigns", "Clock", "Execution history & detailed results."),
            ("Battle Arena", "/battle-arena", "Target", "Adversarial simulation & monitoring."),
            ("Human Review", "/human-review", "Users", "Manual scoring for edge cases."),
        ],
    ),
    (
        "Security & Benchmarks",
        &[
            (
                "Red Teaming",
                "/red-teaming",
                "ShieldCheck",
                "Automated security attacks (Jailbreak).",
            ),
            ("Benchmarks", "/benchmarks", "BarChart3", "Academic benchmarks (MMLU, GSM8K)."),
        ],
    ),
    (
        "Configuration",
        &[
            ("AI Agents", "/agents", "Webhook", "Manage AI projects & CI/CD trigger config."),
            ("Models", "/models", "BrainCircuit", "Manage LLM Registry (GPT-4, Claude 3.5)."),
            ("Knowledge Bases", "/knowledge-bases", "Database", "Manage Vector DB & RAG Sources."),
            ("Test Datasets", "/dataset-gen", "FileCode", "Auto-generate test data from documents."),
            (
                "Metrics Library",
                "/metrics-library",
                "Settings",
                "Configure evaluation standards & Custom G-Eval.",
            ),
            (
                "Billing & Plans",
                "/settings/billing",
                "CreditCard",
                "Manage subscription and usage limits.",
            ),
        ],
    ),
];

/// 侧边栏导航分组
pub fn nav_groups() -> Vec<NavGroup> {
    GROUPS
        .iter()
        .map(|(title, items)| NavGroup {
            title: title.to_string(),
            items: items
                .iter()
                .map(|(name, href, icon, description)| NavItem {
                    name: name.to_string(),
                    href: href.to_string(),
                    icon: icon.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        })
        .collect()
}
