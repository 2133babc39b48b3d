mod common;

use common::{date, setup};
use lending_desk::application::fines::{FineError, outstanding_balance, pay_fine, record_fine};
use lending_desk::domain::commands::{PayFine, RecordFine};
use lending_desk::domain::fine::Fine;
use lending_desk::domain::value_objects::{FineId, MediaCategory};

// ============================================================================
// 罰金台帳の統合テスト
// ============================================================================

#[tokio::test]
async fn test_balance_is_zero_for_user_with_no_fines() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");

    // 罰金ゼロ件はエラーではなく残高0
    assert_eq!(outstanding_balance(&ctx.deps, user_id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_balance_sums_only_unpaid_fines_of_that_user() {
    let ctx = setup(date(2024, 1, 1));
    let alice = ctx.add_member("Alice", "alice@example.com");
    let bob = ctx.add_member("Bob", "bob@example.com");

    ctx.fine_repository.seed(Fine::unpaid(alice, 10.0));
    ctx.fine_repository.seed(Fine::unpaid(alice, 20.0));
    ctx.fine_repository.seed(Fine {
        paid: true,
        ..Fine::unpaid(alice, 10.0)
    });
    ctx.fine_repository.seed(Fine::unpaid(bob, 20.0));

    // 支払済みと他の利用者の罰金は数えない
    assert_eq!(outstanding_balance(&ctx.deps, alice).await.unwrap(), 30.0);
    assert_eq!(outstanding_balance(&ctx.deps, bob).await.unwrap(), 20.0);
}

#[tokio::test]
async fn test_record_fine_stores_flat_amount_per_category() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Carol", "carol@example.com");

    let book_fine = record_fine(
        &ctx.deps,
        RecordFine {
            user_id,
            category: MediaCategory::Book,
            overdue_days: 7,
        },
    )
    .await
    .unwrap();
    assert!(book_fine.is_some());

    let cd_fine = record_fine(
        &ctx.deps,
        RecordFine {
            user_id,
            category: MediaCategory::Cd,
            overdue_days: 1,
        },
    )
    .await
    .unwrap();
    assert!(cd_fine.is_some());

    // 日数に関わらず区分ごとの固定額
    let fines = ctx.fine_repository.all();
    assert_eq!(fines.len(), 2);
    assert_eq!(fines[0].amount, 10.0);
    assert_eq!(fines[1].amount, 20.0);
    assert_eq!(outstanding_balance(&ctx.deps, user_id).await.unwrap(), 30.0);
}

#[tokio::test]
async fn test_record_fine_with_zero_amount_creates_no_record() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Dave", "dave@example.com");

    let result = record_fine(
        &ctx.deps,
        RecordFine {
            user_id,
            category: MediaCategory::Book,
            overdue_days: 0,
        },
    )
    .await
    .unwrap();

    // 額0の罰金は永続化されない
    assert_eq!(result, None);
    assert!(ctx.fine_repository.all().is_empty());
}

#[tokio::test]
async fn test_pay_fine_marks_fine_as_paid() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Erin", "erin@example.com");

    let fine = Fine::unpaid(user_id, 10.0);
    let fine_id = fine.fine_id;
    ctx.fine_repository.seed(fine);

    pay_fine(&ctx.deps, PayFine { fine_id }).await.unwrap();

    let fines = ctx.fine_repository.all();
    assert!(fines[0].paid);
    assert_eq!(outstanding_balance(&ctx.deps, user_id).await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_pay_fine_is_idempotent() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Frank", "frank@example.com");

    let fine = Fine::unpaid(user_id, 20.0);
    let fine_id = fine.fine_id;
    ctx.fine_repository.seed(fine);

    pay_fine(&ctx.deps, PayFine { fine_id }).await.unwrap();
    // 2回目の支払いは冪等な無操作
    pay_fine(&ctx.deps, PayFine { fine_id }).await.unwrap();

    let fines = ctx.fine_repository.all();
    assert_eq!(fines.len(), 1);
    assert!(fines[0].paid);
}

#[tokio::test]
async fn test_pay_unknown_fine_fails() {
    let ctx = setup(date(2024, 1, 1));

    let result = pay_fine(
        &ctx.deps,
        PayFine {
            fine_id: FineId::new(),
        },
    )
    .await;

    assert!(matches!(result, Err(FineError::FineNotFound)));
}
