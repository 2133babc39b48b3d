use super::MediaCategory;

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnLoanError {
    /// 既に返却済み
    AlreadyReturned,
}

/// 罰金計算のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FineCalculationError {
    /// 区分に対応する罰金戦略が登録されていない
    ///
    /// MediaCategoryは閉じた列挙なので到達しないはずだが、
    /// 黙ってデフォルトにフォールバックせず明示的に失敗させる。
    UnsupportedCategory(MediaCategory),
}
