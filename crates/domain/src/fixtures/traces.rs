use serde_json::{json, Value};

/// Langfuse 不可用时的追踪列表
pub fn traces() -> Vec<Value> {
    vec![
        json!({
            "id": "trc_mock_001",
            "name": "chat-rag-pipeline",
            "timestamp": "2024-02-03T10:30:00Z",
            "latency": 3.45,
            "totalCost": 0.0042,
            "status": "success",
            "userId": "user_123",
            "tags": ["production", "rag"]
        }),
        json!({
            "id": "trc_mock_002",
            "name": "simple-chat",
            "timestamp": "2024-02-03T10:25:00Z",
            "latency": 1.2,
            "totalCost": 0.0015,
            "status": "success",
            "userId": "user_456",
            "tags": ["production"]
        }),
        json!({
            "id": "trc_mock_003",
            "name": "document-qa",
            "timestamp": "2024-02-03T09:15:00Z",
            "latency": 2.8,
            "totalCost": 0.0038,
            "status": "success",
            "userId": "user_789",
            "tags": ["production", "qa"]
        }),
    ]
}

fn score(
    id: &str,
    name: &str,
    value: f64,
    data_type: &str,
    source: &str,
    at: &str,
    comment: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "value": value,
        "dataType": data_type,
        "source": source,
        "timestamp": at,
        "comment": comment,
        "observationId": "obs_generation"
    })
}

/// 单条追踪详情：一次 RAG 问答的 span 树，`id` 由调用方覆盖
pub fn trace_detail() -> Value {
    json!({
        "id": "trc_mock_001",
        "name": "chat-rag-pipeline",
        "timestamp": "2024-02-03T10:30:00Z",
        "latency": 3.45,
        "totalCost": 0.0042,
        "status": "success",
        "observations": [
            {
                "id": "obs_root",
                "name": "Trace: Chat Request",
                "type": "SPAN",
                "startTime": "2024-02-03T10:30:00.000Z",
                "endTime": "2024-02-03T10:30:03.450Z",
                "level": 0,
                "input": { "role": "user", "content": "Chính sách bảo hành pin VF3 như thế nào?" },
                "output": {
                    "role": "assistant",
                    "content": "Chính sách bảo hành pin xe VF3 được quy định như sau: Pin được bảo hành 8 năm hoặc 160.000km tùy điều kiện nào đến trước. Bảo hành bao gồm sửa chữa hoặc thay thế miễn phí nếu pin bị lỗi do nhà sản xuất."
                }
            },
            {
                "id": "obs_retrieval",
                "name": "Retrieval: Vector Search",
                "type": "SPAN",
                "startTime": "2024-02-03T10:30:00.100Z",
                "endTime": "2024-02-03T10:30:00.900Z",
                "level": 1,
                "parentObservationId": "obs_root",
                "input": { "query": "chính sách bảo hành pin VF3", "top_k": 5 },
                "output": {
                    "documents": ["doc_vf3_policy_v2.pdf", "doc_warranty_terms.pdf"],
                    "scores": [0.89, 0.75]
                }
            },
            {
                "id": "obs_rerank",
                "name": "Rerank: Cohere",
                "type": "SPAN",
                "startTime": "2024-02-03T10:30:00.950Z",
                "endTime": "2024-02-03T10:30:01.350Z",
                "level": 1,
                "parentObservationId": "obs_root",
                "model": "rerank-multilingual-v2.0",
                "usage": { "totalTokens": 50 },
                "calculatedTotalCost": 0.0001,
                "input": { "query": "chính sách bảo hành pin VF3", "docs": 5 },
                "output": { "top_docs": 3 }
            },
            {
                "id": "obs_generation",
                "name": "Generation: GPT-4o",
                "type": "GENERATION",
                "startTime": "2024-02-03T10:30:01.400Z",
                "endTime": "2024-02-03T10:30:03.400Z",
                "level": 1,
                "parentObservationId": "obs_root",
                "model": "gpt-4o",
                "usage": {
                    "promptTokens": 500,
                    "completionTokens": 700,
                    "totalTokens": 1200
                },
                "calculatedTotalCost": 0.0041,
                "input": {
                    "messages": [
                        { "role": "system", "content": "Bạn là trợ lý AI của Tesla, chuyên tư vấn về xe điện." },
                        { "role": "user", "content": "Context: [Chính sách bảo hành pin VF3...]\n\nQuestion: Chính sách bảo hành pin VF3 như thế nào?" }
                    ]
                },
                "output": {
                    "content": "Chính sách bảo hành pin xe VF3 được quy định như sau: Pin được bảo hành 8 năm hoặc 160.000km tùy điều kiện nào đến trước...",
                    "finish_reason": "stop"
                },
                "scores": [
                    score("score-1", "Relevance", 0.95, "NUMERIC", "HUMAN", "2024-02-03T14:30:00Z", "Highly relevant response to the query"),
                    score("score-2", "Accuracy", 1.0, "BOOLEAN", "AI", "2024-02-03T14:30:05Z", "Factually correct information"),
                    score("score-3", "Coherence", 0.88, "NUMERIC", "EVAL", "2024-02-03T14:30:10Z", "Well-structured and logical response"),
                    score("score-4", "Safety Check", 1.0, "BOOLEAN", "AI", "2024-02-03T14:30:15Z", "No harmful content detected")
                ],
                "metadata": { "temperature": 0.7, "top_p": 1.0 }
            }
        ]
    })
}
