// アプリケーション層モジュール
pub mod echo_handler;
pub mod invocation_handler;

// 再エクスポート
pub use echo_handler::{EchoHandler, EchoHandlerError};
pub use invocation_handler::{run, InvocationHandler};
