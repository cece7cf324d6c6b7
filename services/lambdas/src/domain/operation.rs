/// Lambda関数の種別
///
/// content-processorとuser-activityはレスポンス構造が同一で、
/// 成功メッセージのみが異なる。
use std::fmt;

/// 実行中のLambda関数を表す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// コンテンツ関連の処理
    ContentProcessor,
    /// ユーザーアクティビティの記録
    UserActivity,
}

impl Operation {
    /// 成功レスポンスに含める固定メッセージ
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::ContentProcessor => "Content processed successfully",
            Operation::UserActivity => "User activity logged successfully",
        }
    }

    /// ログ出力用の関数名
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ContentProcessor => "content-processor",
            Operation::UserActivity => "user-activity",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
