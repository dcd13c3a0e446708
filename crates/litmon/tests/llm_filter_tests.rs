//! Mock-based tests for the LLM-assisted filter strategy.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use litmon::config::Config;
use litmon::filter::{FilterMode, PaperFilter};
use litmon::llm::LlmClient;
use litmon::models::Paper;
use litmon::{FilterError, LlmError};

/// 25 papers with zero-padded titles so chunk boundaries are unambiguous.
fn sample_papers() -> Vec<Paper> {
    (0..25)
        .map(|i| {
            Paper::new(
                format!("alpha-{i:02}"),
                vec![format!("Author {i:02}")],
                format!("Abstract {i:02}"),
            )
        })
        .collect()
}

/// Chat-completions payload whose content is a serialized paper list.
fn completion_with(titles: &[&str]) -> serde_json::Value {
    let papers: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| json!({ "title": title, "authors": ["Model Pick"], "abstract": "picked" }))
        .collect();
    let content = json!({ "papers": papers }).to_string();
    json!({ "choices": [{ "message": { "content": content } }] })
}

fn test_filter(config: &Config) -> PaperFilter {
    PaperFilter::new(LlmClient::new(config).unwrap())
}

#[tokio::test]
async fn twenty_five_papers_issue_exactly_three_calls_in_chunk_order() {
    let mock_server = MockServer::start().await;

    // One mock per chunk, keyed on a title unique to that chunk.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("alpha-00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&["pick-one"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("alpha-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&["pick-two"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("alpha-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&["pick-three"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config).with_chunk_size(10);

    let kept =
        filter.filter(&sample_papers(), "pick the good ones", FilterMode::Llm).await.unwrap();

    // Chunks of 10, 10, 5; per-chunk selections concatenated in chunk order.
    let titles: Vec<&str> = kept.iter().map(|paper| paper.title.as_str()).collect();
    assert_eq!(titles, vec!["pick-one", "pick-two", "pick-three"]);
}

#[tokio::test]
async fn chunk_boundaries_do_not_leak_papers_across_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&[])))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config).with_chunk_size(10);
    filter.filter(&sample_papers(), "anything", FilterMode::Llm).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    let bodies: Vec<String> =
        requests.iter().map(|request| String::from_utf8_lossy(&request.body).into_owned()).collect();
    assert!(bodies[0].contains("alpha-09") && !bodies[0].contains("alpha-10"));
    assert!(bodies[1].contains("alpha-10") && !bodies[1].contains("alpha-20"));
    assert!(bodies[2].contains("alpha-20") && !bodies[2].contains("alpha-00"));
}

#[tokio::test]
async fn prompt_carries_query_and_serialized_papers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Choose papers about watermarking"))
        .and(body_string_contains("alpha-00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&["pick"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config);

    let papers = sample_papers()[..3].to_vec();
    let kept =
        filter.filter(&papers, "Choose papers about watermarking", FilterMode::Llm).await.unwrap();
    assert_eq!(kept.len(), 1);
}

#[tokio::test]
async fn empty_input_issues_no_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config);

    let kept = filter.filter(&[], "anything", FilterMode::Llm).await.unwrap();
    assert!(kept.is_empty());
}

#[tokio::test]
async fn chunk_failure_fails_the_whole_call_without_partial_results() {
    let mock_server = MockServer::start().await;

    // First chunk succeeds, second is refused: the call must fail anyway.
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("alpha-00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with(&["pick-one"])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("alpha-10"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config).with_chunk_size(10);

    let err = filter
        .filter(&sample_papers(), "anything", FilterMode::Llm)
        .await
        .unwrap_err();

    assert!(matches!(err, FilterError::Llm(LlmError::Status { status: 429, .. })));
}

#[tokio::test]
async fn malformed_structured_response_is_an_llm_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "not json at all" } }]
        })))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let filter = test_filter(&config);

    let papers = sample_papers()[..2].to_vec();
    let err = filter.filter(&papers, "anything", FilterMode::Llm).await.unwrap_err();

    assert!(matches!(err, FilterError::Llm(LlmError::Payload(_))));
}
