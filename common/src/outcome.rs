//! 送信結果の分類
//!
//! `/predict` の1回の送信は次のいずれかで終わる:
//! 1. 成功ステータス + 予測結果JSON → `Success`
//! 2. 失敗ステータス → `ServerError`（`error` フィールド、無ければ汎用文言）
//! 3. 通信例外・成功ステータスなのに不正なボディ → `Transport`

use std::fmt;

use crate::types::{ErrorBody, PredictionResult};

/// サーバーが理由を返さなかった場合の文言
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// 通信失敗時の文言（後ろにエラー内容を連結する）
pub const CONNECTION_FAILURE_PREFIX: &str =
    "Failed to connect to the server or an unexpected error occurred: ";

/// 1回の送信の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success(PredictionResult),
    ServerError(String),
    Transport(String),
}

impl SubmitOutcome {
    /// HTTPレスポンスを分類
    ///
    /// # Arguments
    /// * `ok` - ステータスが2xxかどうか
    /// * `body` - レスポンスボディ（テキスト）
    pub fn from_response(ok: bool, body: &str) -> Self {
        if ok {
            match serde_json::from_str::<PredictionResult>(body) {
                Ok(result) => SubmitOutcome::Success(result),
                Err(e) => SubmitOutcome::transport_failure(e),
            }
        } else {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
            SubmitOutcome::ServerError(message)
        }
    }

    /// 通信例外から結果を作成
    pub fn transport_failure(description: impl fmt::Display) -> Self {
        SubmitOutcome::Transport(format!("{}{}", CONNECTION_FAILURE_PREFIX, description))
    }

    /// ログ用の種別名
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitOutcome::Success(_) => "success",
            SubmitOutcome::ServerError(_) => "server-error",
            SubmitOutcome::Transport(_) => "transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let body = r#"{"verified": true, "distance": 0.2, "threshold": 0.4,
                       "model": "ArcFace", "similarity_metric": "cosine"}"#;

        match SubmitOutcome::from_response(true, body) {
            SubmitOutcome::Success(result) => {
                assert!(result.verified);
                assert_eq!(result.model, "ArcFace");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_server_error_verbatim() {
        let outcome = SubmitOutcome::from_response(false, r#"{"error": "No face detected"}"#);
        assert_eq!(outcome, SubmitOutcome::ServerError("No face detected".to_string()));
    }

    #[test]
    fn test_server_error_empty_body_falls_back() {
        let outcome = SubmitOutcome::from_response(false, "");
        assert_eq!(outcome, SubmitOutcome::ServerError(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_server_error_html_body_falls_back() {
        let outcome = SubmitOutcome::from_response(false, "<h1>Internal Server Error</h1>");
        assert_eq!(outcome, SubmitOutcome::ServerError(UNKNOWN_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_server_error_without_error_field_falls_back() {
        for body in [r#"{}"#, r#"{"error": ""}"#, r#"{"error": null}"#, r#"[1, 2]"#] {
            let outcome = SubmitOutcome::from_response(false, body);
            assert_eq!(
                outcome,
                SubmitOutcome::ServerError(UNKNOWN_ERROR_MESSAGE.to_string()),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_success_status_with_invalid_body_is_transport() {
        let outcome = SubmitOutcome::from_response(true, "not json");
        match outcome {
            SubmitOutcome::Transport(message) => {
                assert!(message.starts_with(CONNECTION_FAILURE_PREFIX));
                assert!(message.len() > CONNECTION_FAILURE_PREFIX.len());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_appends_description() {
        let outcome = SubmitOutcome::transport_failure("Failed to fetch");
        assert_eq!(
            outcome,
            SubmitOutcome::Transport(
                "Failed to connect to the server or an unexpected error occurred: Failed to fetch"
                    .to_string()
            )
        );
        assert_eq!(outcome.kind(), "transport");
    }
}
