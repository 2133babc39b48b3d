use chrono::NaiveDate;

/// 時計ポート
///
/// 延滞判定に使う「今日」を供給する。システム時計を直接読まず
/// 注入可能にすることで、決定的なテストを可能にする。
pub trait Clock: Send + Sync {
    /// 基準日を取得する
    fn today(&self) -> NaiveDate;
}
