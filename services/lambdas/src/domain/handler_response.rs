/// Lambdaレスポンス型
///
/// 両関数とも`{"statusCode": ..., "body": "<JSON文字列>"}`の形で応答する。
/// bodyは成功時に`{"message", "event"}`、失敗時に`{"error"}`を持つ。
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// 失敗時のステータスコード
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// bodyにエンコードされるJSONオブジェクト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// 成功: 固定メッセージと受信イベントをそのまま返す
    Success { message: String, event: Value },
    /// 失敗: エラーの文字列表現
    Failure { error: String },
}

/// Lambda関数の戻り値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// 成功レスポンスを作成
    ///
    /// イベントは受信時の数値表現とキー順序のまま埋め込まれる。
    pub fn success(message: &str, event: Value) -> Self {
        let body = json!({
            "message": message,
            "event": event,
        });

        Self {
            status_code: STATUS_OK,
            body: body.to_string(),
        }
    }

    /// 失敗レスポンスを作成
    pub fn failure(error: impl Display) -> Self {
        // 単一の文字列フィールドなのでエンコードは失敗しない
        let body = json!({ "error": error.to_string() });

        Self {
            status_code: STATUS_INTERNAL_ERROR,
            body: body.to_string(),
        }
    }

    /// Lambdaランタイムに返すJSON値へ変換
    pub fn to_value(&self) -> Value {
        json!({
            "statusCode": self.status_code,
            "body": self.body,
        })
    }

    /// bodyをデコード
    pub fn parse_body(&self) -> Result<ResponseBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_status_and_body() {
        let event = json!({"contentId": "abc", "action": "transcode"});

        let response = HandlerResponse::success("Content processed successfully", event.clone());

        assert_eq!(response.status_code, STATUS_OK);
        assert_eq!(
            response.parse_body().unwrap(),
            ResponseBody::Success {
                message: "Content processed successfully".to_string(),
                event,
            }
        );
    }

    #[test]
    fn test_success_body_keeps_key_order() {
        let response = HandlerResponse::success("ok", json!({"b": 1, "a": 2}));

        assert_eq!(response.body, r#"{"message":"ok","event":{"b":1,"a":2}}"#);
    }

    #[test]
    fn test_success_with_null_event() {
        let response = HandlerResponse::success("ok", Value::Null);

        assert_eq!(response.body, r#"{"message":"ok","event":null}"#);
        match response.parse_body().unwrap() {
            ResponseBody::Success { event, .. } => assert!(event.is_null()),
            other => panic!("Expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_response() {
        let response = HandlerResponse::failure("something broke");

        assert_eq!(response.status_code, STATUS_INTERNAL_ERROR);
        assert_eq!(response.body, r#"{"error":"something broke"}"#);
        assert_eq!(
            response.parse_body().unwrap(),
            ResponseBody::Failure {
                error: "something broke".to_string()
            }
        );
    }

    #[test]
    fn test_failure_escapes_quotes() {
        let response = HandlerResponse::failure(r#"bad "value""#);

        let parsed: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(parsed["error"], r#"bad "value""#);
    }

    #[test]
    fn test_to_value_uses_status_code_key() {
        let response = HandlerResponse::failure("x");

        let value = response.to_value();

        assert_eq!(value["statusCode"], 500);
        assert_eq!(value["body"], r#"{"error":"x"}"#);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_matches_to_value() {
        let response = HandlerResponse::success("ok", json!([1, 2, 3]));

        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(serialized, response.to_value());

        let decoded: HandlerResponse = serde_json::from_value(serialized).unwrap();
        assert_eq!(decoded, response);
    }
}
