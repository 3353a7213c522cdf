//! OpenAI chat-completion client.
//!
//! One request per run, no retries. The endpoint URL lives in [`Config`] so
//! tests can point it at a mock server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Failed to send request to OpenAI API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("OpenAI API rejected the API key ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("OpenAI API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse OpenAI response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("OpenAI response contained no choices")]
    NoChoices,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

const SYSTEM_PROMPT: &str = "You are a helpful assistant who helps developers localize their apps. \
You are given a list of strings to localize. You are also given a list of languages to translate to. \
Listen to the instructions carefully and localize the strings in the way you're asked to.";

/// Send the rendered localization instructions to the chat-completion
/// endpoint and return the raw reply text.
pub async fn request_translations(
    client: &reqwest::Client,
    config: &Config,
    instructions: &str,
) -> Result<String, CompletionError> {
    let request = ChatRequest {
        model: config.openai_model.clone(),
        messages: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: instructions.to_string(),
            },
        ],
    };

    let response = client
        .post(&config.openai_api_url)
        .header("Authorization", format!("Bearer {}", config.openai_api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CompletionError::Auth {
                status: status.as_u16(),
                body,
            });
        }
        return Err(CompletionError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .map_err(CompletionError::MalformedResponse)?;

    chat_response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or(CompletionError::NoChoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_test_config(api_url: &str) -> Config {
        Config {
            openai_api_key: "test-openai-key".to_string(),
            openai_api_url: api_url.to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            input_file: PathBuf::from("strings.txt"),
            languages_file: PathBuf::from("languages_list.txt"),
            template_file: PathBuf::from("template.txt"),
            extra_information: String::new(),
            assets_folder: PathBuf::from("Assets"),
            translations_output: PathBuf::from("translations.txt"),
        }
    }

    fn create_openai_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: "Translate these strings".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains("gpt-4o-mini"));
        assert!(json.contains("system"));
        assert!(json.contains("user"));
        assert!(json.contains("localize their apps"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "// French\n\"hello\" = \"Bonjour\";"
                    }
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.contains("Bonjour"));
    }

    #[test]
    fn test_chat_response_empty_choices() {
        let json = r#"{"choices": []}"#;
        let response: ChatResponse = serde_json::from_str(json).expect("Should deserialize");
        assert!(response.choices.is_empty());
    }

    // ==================== request_translations Tests ====================

    #[tokio::test]
    async fn test_request_translations_success() {
        let mock_server = MockServer::start().await;

        let reply = "// French\n\"greeting\" = \"Bonjour\";";
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-openai-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_partial_json(
                serde_json::json!({"model": "gpt-4o-mini"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response(reply)))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let result = request_translations(&client, &config, "Translate please")
            .await
            .expect("Should succeed");

        assert_eq!(result, reply);
    }

    #[tokio::test]
    async fn test_request_translations_sends_instructions_as_user_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": "the rendered instructions"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_openai_response("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        request_translations(&client, &config, "the rendered instructions")
            .await
            .expect("Should succeed");
    }

    #[tokio::test]
    async fn test_request_translations_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"error": {"message": "Invalid API key"}}"#),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let err = request_translations(&client, &config, "x")
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::Auth { status: 401, .. }));
        assert!(err.to_string().contains("rejected the API key"));
    }

    #[tokio::test]
    async fn test_request_translations_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let err = request_translations(&client, &config, "x")
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::Api { status: 500, .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_request_translations_empty_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let err = request_translations(&client, &config, "x")
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::NoChoices));
    }

    #[tokio::test]
    async fn test_request_translations_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let err = request_translations(&client, &config, "x")
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_request_translations_no_retry_on_500() {
        let mock_server = MockServer::start().await;

        // A failing endpoint must be hit exactly once.
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_test_config(&format!("{}/v1/chat/completions", mock_server.uri()));
        let client = reqwest::Client::new();

        let _ = request_translations(&client, &config, "x").await;
    }
}
