use crate::domain::loan::{self, Loan};
use crate::domain::user::User;

use super::super::ServiceDependencies;

/// 督促メールの件名
const REMINDER_SUBJECT: &str = "Library Overdue Item Reminder";

/// 延滞督促バッチ
///
/// 毎回フルスキャンで、基準日時点で延滞中かつ未返却の貸出1件につき
/// 1通の督促を送信する。
///
/// ビジネスルール：
/// - 貸出の持ち主が見つからない場合はスキップする（失敗にしない。
///   ファイルベースの読み取り間ではデータが一時的に不整合になりうる）
/// - 1件の送信失敗はログに記録し、同じバッチ内の後続の送信を妨げない
/// - 送信済みの督促との重複排除は行わない。同じ延滞貸出に対して
///   呼び出しのたびに再送される（観測された仕様であり、テストで固定する）
///
/// # 戻り値
/// 送信に成功した督促の件数
pub async fn send_overdue_reminders(
    deps: &ServiceDependencies,
) -> std::result::Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let today = deps.clock.today();

    let loans = deps.loan_repository.load_all().await?;
    let users = deps.user_repository.load_all().await?;

    let mut sent_count = 0;

    for overdue_loan in loans.iter().filter(|l| loan::is_overdue(l, today)) {
        // 持ち主の解決に失敗したらスキップ
        let Some(user) = users.iter().find(|u| u.user_id == overdue_loan.user_id) else {
            tracing::warn!(
                loan_id = %overdue_loan.loan_id.value(),
                user_id = %overdue_loan.user_id.value(),
                "skipping reminder: user not found for overdue loan"
            );
            continue;
        };

        let body = compose_reminder_body(user, overdue_loan);

        match deps
            .notification_sender
            .send(&user.email, REMINDER_SUBJECT, &body)
            .await
        {
            Ok(()) => sent_count += 1,
            Err(e) => {
                // 送信失敗はバッチを中断しない
                tracing::warn!(
                    loan_id = %overdue_loan.loan_id.value(),
                    to = %user.email,
                    error = %e,
                    "failed to send overdue reminder"
                );
            }
        }
    }

    tracing::info!(sent_count, "overdue reminder batch finished");

    Ok(sent_count)
}

/// 督促本文を組み立てる
///
/// 貸出ID・貸出日・返却期限を参照する。
fn compose_reminder_body(user: &User, loan: &Loan) -> String {
    format!(
        "Dear {},\n\n\
         This is a reminder that your loan (Loan ID: {}) is overdue.\n\
         Borrowed on: {}\n\
         Due on: {}\n\n\
         Please return the item as soon as possible.\n\n\
         Best regards,\nLibrary System",
        user.name,
        loan.loan_id.value(),
        loan.borrow_date,
        loan.due_date,
    )
}
