use serde_json::{json, Value};

/// 场景编辑器的默认图：退款流程测试，`{ nodes, edges }`
pub fn default_scenario_graph() -> Value {
    json!({
        "nodes": [
            {
                "id": "start",
                "position": { "x": 400, "y": 0 },
                "data": {
                    "label": "Start: Refund Test",
                    "category": "start",
                    "description": "Kịch bản kiểm thử luồng hoàn tiền đơn hàng E-commerce."
                },
                "type": "input"
            },
            {
                "id": "trigger",
                "position": { "x": 400, "y": 200 },
                "data": {
                    "label": "Trigger: GitHub PR",
                    "category": "trigger",
                    "triggerType": "webhook",
                    "webhookSlug": "/webhooks/refund-pr-merge"
                }
            },
            {
                "id": "persona",
                "position": { "x": 400, "y": 450 },
                "data": {
                    "label": "Persona: Angry Customer",
                    "category": "persona",
                    "role": "Khách hàng khó tính",
                    "prompt": "Bạn là khách hàng vừa nhận được hàng bị vỡ. Bạn rất tức giận và muốn hoàn tiền ngay lập tức.",
                    "modelProvider": "gpt-4o"
                }
            },
            {
                "id": "task_refund",
                "position": { "x": 400, "y": 700 },
                "data": {
                    "label": "Task: Request Refund",
                    "category": "task",
                    "instruction": "Yêu cầu hoàn tiền cho đơn hàng #ORD-2024. Nếu bot từ chối, hãy đe dọa rời bỏ dịch vụ.",
                    "difficulty": "hard"
                }
            },
            {
                "id": "tool_check_order",
                "position": { "x": 400, "y": 950 },
                "data": {
                    "label": "Tool: Check Order Status",
                    "category": "tool",
                    "functionName": "get_order_status",
                    "endpointUrl": "https://api.shop.com/v1/orders/ORD-2024",
                    "method": "GET",
                    "outputVar": "order_data"
                }
            },
            {
                "id": "transform_status",
                "position": { "x": 400, "y": 1200 },
                "data": {
                    "label": "Transform: Parse JSON",
                    "category": "transform",
                    "transformSpec": "order_data.status"
                }
            },
            {
                "id": "condition_delivered",
                "position": { "x": 400, "y": 1450 },
                "data": {
                    "label": "Check: Is Delivered?",
                    "category": "condition",
                    "logicType": "keyword",
                    "conditionValue": "delivered"
                }
            },
            {
                "id": "wait_process",
                "position": { "x": 100, "y": 1700 },
                "data": { "label": "Wait: Processing", "category": "wait", "duration": "5" }
            },
            {
                "id": "expect_faithfulness",
                "position": { "x": 100, "y": 1950 },
                "data": {
                    "label": "Expect: Faithful Answer",
                    "category": "expectation",
                    "evalProvider": "deepeval",
                    "metrics": ["faithfulness", "answer_relevancy", "toxicity"],
                    "threshold": 0.8,
                    "severity": "critical"
                }
            },
            {
                "id": "code_validate",
                "position": { "x": 100, "y": 2200 },
                "data": {
                    "label": "Code: Validate Policy",
                    "category": "code",
                    "language": "python",
                    "code": "def validate(amount):\n  return amount < 1000\n\nresult = validate(refund_amount)",
                    "inputVars": "refund_amount",
                    "outputVars": "is_valid"
                }
            },
            {
                "id": "end_success",
                "position": { "x": 100, "y": 2500 },
                "data": {
                    "label": "End: Test Passed",
                    "category": "end",
                    "outputTemplate": "{\"result\": \"PASS\", \"score\": {{score}}}"
                },
                "type": "output"
            },
            {
                "id": "end_fail",
                "position": { "x": 700, "y": 1700 },
                "data": {
                    "label": "End: Invalid Status",
                    "category": "end",
                    "outputTemplate": "{\"result\": \"FAIL\", \"reason\": \"Order not delivered\"}"
                },
                "type": "output"
            }
        ],
        "edges": [
            { "id": "e1", "source": "start", "target": "trigger", "animated": true },
            { "id": "e2", "source": "trigger", "target": "persona", "animated": true },
            { "id": "e3", "source": "persona", "target": "task_refund", "animated": true },
            { "id": "e4", "source": "task_refund", "target": "tool_check_order", "animated": true },
            { "id": "e5", "source": "tool_check_order", "target": "transform_status", "animated": true },
            { "id": "e6", "source": "transform_status", "target": "condition_delivered", "animated": true },
            { "id": "e7a", "source": "condition_delivered", "target": "wait_process", "label": "True (Delivered)" },
            { "id": "e8", "source": "wait_process", "target": "expect_faithfulness", "animated": true },
            { "id": "e9", "source": "expect_faithfulness", "target": "code_validate", "animated": true },
            { "id": "e10", "source": "code_validate", "target": "end_success", "animated": true },
            {
                "id": "e7b",
                "source": "condition_delivered",
                "target": "end_fail",
                "label": "False (Pending)",
                "style": { "stroke": "#ef4444" }
            }
        ]
    })
}

fn node(id: &str, x: i64, y: i64, data: Value) -> Value {
    json!({
        "id": id,
        "type": "customNode",
        "position": { "x": x, "y": y },
        "data": data
    })
}

fn edge(id: &str, source: &str, target: &str) -> Value {
    json!({ "id": id, "source": source, "target": target, "type": "smoothstep" })
}

/// 场景详情，只有 `sc_1` 有完整的节点图
pub fn scenario_detail(id: &str) -> Option<Value> {
    match id {
        "sc_1" => Some(tesla_demo_scenario()),
        _ => None,
    }
}

fn tesla_demo_scenario() -> Value {
    let edges = vec![
        json!({ "id": "e-start-persona1", "source": "node-start", "target": "node-persona-1", "type": "smoothstep", "animated": true }),
        json!({ "id": "e-start-persona2", "source": "node-start", "target": "node-persona-2", "type": "smoothstep", "animated": true }),
        edge("e-persona1-task1", "node-persona-1", "node-task-1"),
        edge("e-persona1-task2", "node-persona-1", "node-task-2"),
        edge("e-persona2-task3", "node-persona-2", "node-task-3"),
        edge("e-task1-cond", "node-task-1", "node-condition-1"),
        edge("e-task2-cond", "node-task-2", "node-condition-1"),
        edge("e-task3-cond", "node-task-3", "node-condition-1"),
        json!({
            "id": "e-cond-wait", "source": "node-condition-1", "target": "node-wait-1",
            "type": "smoothstep", "label": "Low Confidence", "animated": true,
            "style": { "stroke": "#d97706" }
        }),
        json!({
            "id": "e-cond-expect", "source": "node-condition-1", "target": "node-expect-1",
            "type": "smoothstep", "label": "High Confidence", "animated": true,
            "style": { "stroke": "#059669" }
        }),
        edge("e-wait-trigger", "node-wait-1", "node-trigger-1"),
        edge("e-expect-tool", "node-expect-1", "node-tool-1"),
        edge("e-trigger-transform", "node-trigger-1", "node-transform-1"),
        edge("e-tool-code", "node-tool-1", "node-code-1"),
        edge("e-code-transform", "node-code-1", "node-transform-1"),
        edge("e-transform-end", "node-transform-1", "node-end"),
    ];

    json!({
        "id": "sc_1",
        "name": "Demo: Đánh Giá Toàn Diện Chatbot Tesla",
        "description": "Kịch bản demo đầy đủ tất cả các loại node - từ persona, task, điều kiện, đến code execution và tool calls",
        "agent_id": "agent-001",
        "agent_name": "Tesla Support Bot",
        "difficulty": "intermediate",
        "tags": ["demo", "comprehensive", "all-nodes"],
        "nodes": [
            node("node-start", 400, 50, json!({
                "label": "Bắt đầu Kịch bản", "type": "start", "category": "start",
                "instruction": "Khởi tạo luồng đánh giá chatbot"
            })),
            node("node-persona-1", 200, 400, json!({
                "label": "Khách Hàng Tiềm Năng", "type": "persona", "category": "persona",
                "instruction": "Nguyễn Văn A - 30 tuổi, kỹ sư IT. Quan tâm đến thông số kỹ thuật và giá cả.",
                "difficulty": "medium"
            })),
            node("node-persona-2", 600, 400, json!({
                "label": "Chuyên Gia Review", "type": "persona", "category": "persona",
                "instruction": "Bot Reviewer - Đánh giá độ chính xác và văn phong của câu trả lời.",
                "difficulty": "hard"
            })),
            node("node-task-1", 100, 800, json!({
                "label": "Hỏi về Giá Xe", "type": "task", "category": "task",
                "instruction": "Người dùng hỏi: 'Tesla giá lăn bánh tại Hà Nội là bao nhiêu?'",
                "modelProvider": "GPT-4o"
            })),
            node("node-task-2", 400, 800, json!({
                "label": "Hỏi về Bảo Hành", "type": "task", "category": "task",
                "instruction": "Người dùng hỏi: 'Chính sách bảo hành pin 10 năm cụ thể như thế nào?'",
                "modelProvider": "Claude 3.5 Sonnet"
            })),
            node("node-task-3", 700, 800, json!({
                "label": "So Sánh Đối Thủ", "type": "task", "category": "task",
                "instruction": "Người dùng hỏi: 'So sánh ưu nhược điểm Tesla với Tesla Model Y?'",
                "modelProvider": "Gemini Pro"
            })),
            node("node-condition-1", 400, 1200, json!({
                "label": "Kiểm Tra Độ Tin Cậy", "type": "condition", "category": "condition",
                "conditionValue": "response.confidence > 0.8",
                "instruction": "Nếu độ tin cậy cao -> Đi tiếp. Nếu thấp -> Trigger cảnh báo."
            })),
            node("node-wait-1", 200, 1600, json!({
                "label": "Đợi 5s", "type": "wait", "category": "wait",
                "instruction": "Chờ phản hồi từ hệ thống..."
            })),
            node("node-expect-1", 600, 1600, json!({
                "label": "Kiểm Tra Keyword", "type": "expectation", "category": "expectation",
                "instruction": "Mong đợi câu trả lời chứa: 'Tesla', 'Bảo hành', '10 năm'",
                "evalProvider": "deepeval",
                "metrics": ["faithfulness", "answer_relevancy"],
                "threshold": 0.85
            })),
            node("node-trigger-1", 100, 2000, json!({
                "label": "Trigger Webhook", "type": "trigger", "category": "trigger",
                "instruction": "Bắn noti về Slack channel #alerts khi confidence thấp."
            })),
            node("node-tool-1", 400, 2000, json!({
                "label": "Gọi API Pricing", "type": "tool", "category": "tool",
                "instruction": "GET https://api.vinfast.vn/v1/pricing?model=vf8"
            })),
            node("node-code-1", 700, 2000, json!({
                "label": "Code Python", "type": "code", "category": "code",
                "instruction": "def calculate_score(response): return len(response) * 0.5"
            })),
            node("node-transform-1", 400, 2400, json!({
                "label": "Format Kết Quả", "type": "transform", "category": "transform",
                "instruction": "Chuyển đổi JSON output thành báo cáo HTML."
            })),
            node("node-end", 400, 2800, json!({
                "label": "Kết Thúc", "type": "end", "category": "end",
                "instruction": "Lưu kết quả vào Database."
            }))
        ],
        "edges": edges
    })
}
