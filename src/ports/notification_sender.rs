use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知送信ポート
///
/// 利用者への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
///
/// 送信失敗は観測されるが、呼び出し側のバッチ処理を中断させない。
/// 1件の失敗が同じパス内の後続の送信を妨げてはならない。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// 通知を送信する
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
