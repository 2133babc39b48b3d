use std::sync::Arc;

use crate::domain::fine::FineCalculator;
use crate::ports::*;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての依存が明示的
/// - データと振る舞いの分離
/// - テストでの差し替えが容易
#[derive(Clone)]
pub struct ServiceDependencies {
    pub loan_repository: Arc<dyn LoanRepository>,
    pub fine_repository: Arc<dyn FineRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub catalog: Arc<dyn Catalog>,
    pub notification_sender: Arc<dyn NotificationSender>,
    pub clock: Arc<dyn Clock>,
    pub fine_calculator: Arc<FineCalculator>,
}
