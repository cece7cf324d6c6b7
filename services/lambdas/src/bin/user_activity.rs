/// user-activity Lambdaエントリポイント
///
/// ユーザーアクティビティの記録リクエストを受け付け、受信イベントを
/// 成功メッセージと共に返却する。
use lambda_runtime::Error;
use lambdas::domain::Operation;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambdas::application::run(Operation::UserActivity).await
}
