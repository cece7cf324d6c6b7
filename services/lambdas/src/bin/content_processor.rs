/// content-processor Lambdaエントリポイント
///
/// コンテンツ関連の処理リクエストを受け付け、受信イベントを
/// 成功メッセージと共に返却する。
use lambda_runtime::Error;
use lambdas::domain::Operation;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambdas::application::run(Operation::ContentProcessor).await
}
