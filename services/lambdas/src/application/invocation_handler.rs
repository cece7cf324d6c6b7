/// Lambda呼び出しハンドラー
///
/// ランタイムから受け取ったイベントをEchoHandlerに渡し、
/// アクセスログを出力してLambdaの戻り値を組み立てる。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::application::EchoHandler;
use crate::domain::Operation;
use crate::infrastructure::{init_logging, FunctionConfig};

/// 1回のLambda呼び出しを処理するハンドラー
#[derive(Debug, Clone)]
pub struct InvocationHandler {
    operation: Operation,
    config: FunctionConfig,
}

impl InvocationHandler {
    /// 新しいInvocationHandlerを作成
    pub fn new(operation: Operation, config: FunctionConfig) -> Self {
        Self { operation, config }
    }

    /// Lambdaイベントを処理して戻り値を返す
    ///
    /// コンテキストはログ出力にのみ使用し、戻り値には影響しない。
    pub fn handle(&self, event: LambdaEvent<Value>) -> Value {
        let (payload, context) = event.into_parts();

        if self.config.log_event_payload() {
            info!(
                function = %self.operation,
                request_id = %context.request_id,
                payload = %payload,
                "イベント受信"
            );
        } else {
            info!(
                function = %self.operation,
                request_id = %context.request_id,
                "イベント受信"
            );
        }

        let response = EchoHandler::new(self.operation).handle(&payload);

        info!(
            function = %self.operation,
            request_id = %context.request_id,
            status_code = response.status_code,
            "レスポンス送信"
        );

        response.to_value()
    }
}

/// Lambda関数を起動する
///
/// # 処理フロー
/// 1. 構造化ログを初期化
/// 2. 環境変数から関数設定を読み込み（コールドスタート時に1回のみ）
/// 3. Lambdaランタイムのイベントループを実行
pub async fn run(operation: Operation) -> Result<(), Error> {
    init_logging();

    let config = FunctionConfig::from_env_or_default();
    info!(
        function = %operation,
        log_event_payload = config.log_event_payload(),
        "Lambda関数を初期化"
    );

    let handler = InvocationHandler::new(operation, config);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let output = handler.handle(event);
        async move { Ok::<Value, Error>(output) }
    }))
    .await
}
