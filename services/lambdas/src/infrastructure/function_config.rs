// Lambda関数設定
//
// 環境変数から関数の動作設定を読み込む。

use thiserror::Error;
use tracing::warn;

/// 受信イベント全文をログ出力するかどうか
pub const LOG_EVENT_PAYLOAD_ENV: &str = "LOG_EVENT_PAYLOAD";

/// 関数設定エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionConfigError {
    /// 真偽値として解釈できない値
    #[error("環境変数{key}の値が真偽値ではありません: {value}")]
    InvalidBool { key: String, value: String },
}

/// Lambda関数の設定
///
/// レスポンス内容には影響せず、ログ出力のみを制御する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionConfig {
    log_event_payload: bool,
}

impl FunctionConfig {
    /// テスト用に明示的な値で作成
    pub fn new(log_event_payload: bool) -> Self {
        Self { log_event_payload }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `LOG_EVENT_PAYLOAD`: `true`/`1`/`yes`/`on`で有効、`false`/`0`/`no`/`off`で無効
    ///   （大文字小文字を区別しない、未設定・空文字は無効）
    ///
    /// # 戻り値
    /// - `Err(FunctionConfigError::InvalidBool)`: 解釈できない値が設定されている
    pub fn from_env() -> Result<Self, FunctionConfigError> {
        let log_event_payload = match std::env::var(LOG_EVENT_PAYLOAD_ENV) {
            Ok(value) => parse_bool(LOG_EVENT_PAYLOAD_ENV, &value)?,
            Err(_) => false,
        };

        Ok(Self { log_event_payload })
    }

    /// 環境変数から設定を読み込み、失敗時はデフォルト設定を使う
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "関数設定の読み込みに失敗、デフォルト設定を使用");
            Self::default()
        })
    }

    /// イベント全文をログ出力するか
    pub fn log_event_payload(&self) -> bool {
        self.log_event_payload
    }
}

/// 環境変数の値を真偽値としてパース
fn parse_bool(key: &str, value: &str) -> Result<bool, FunctionConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(FunctionConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
