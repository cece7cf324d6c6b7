/// エコーハンドラー
///
/// 受信イベントを成功メッセージと共にそのまま返す。
/// content-processorとuser-activityの両関数で共有する。
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{HandlerResponse, Operation};

/// エコーハンドラーのエラー型
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// イベントをJSONに変換できない
    #[error("event is not JSON serializable: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// イベントをエコーするハンドラー
///
/// 入力検証やイベント内容による分岐は行わない。
#[derive(Debug, Clone, Copy)]
pub struct EchoHandler {
    operation: Operation,
}

impl EchoHandler {
    /// 新しいEchoHandlerを作成
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    /// イベントを処理してレスポンスを返す
    ///
    /// レスポンス構築中のエラーはすべて500レスポンスに変換されるため、
    /// この関数自体は失敗しない。
    pub fn handle<E>(&self, event: &E) -> HandlerResponse
    where
        E: Serialize + ?Sized,
    {
        match self.try_handle(event) {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    function = %self.operation,
                    error = %err,
                    "レスポンス構築失敗"
                );
                HandlerResponse::failure(err)
            }
        }
    }

    /// 成功レスポンスの構築を試みる
    ///
    /// # Errors
    /// * `EchoHandlerError::Serialization` - イベントがJSONに変換できない
    pub fn try_handle<E>(&self, event: &E) -> Result<HandlerResponse, EchoHandlerError>
    where
        E: Serialize + ?Sized,
    {
        let event = serde_json::to_value(event).map_err(EchoHandlerError::Serialization)?;

        let response = HandlerResponse::success(self.operation.success_message(), event);

        debug!(function = %self.operation, "成功レスポンス構築完了");

        Ok(response)
    }
}
