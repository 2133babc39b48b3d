mod common;

use common::{date, setup};
use lending_desk::application::users::{
    UserError, authenticate, find_user, register, unregister,
};
use lending_desk::domain::commands::{RegisterUser, UnregisterUser};
use lending_desk::domain::fine::Fine;
use lending_desk::domain::loan;
use lending_desk::domain::value_objects::{MediaCategory, Role, UserId};

fn register_command(email: &str, password: &str) -> RegisterUser {
    RegisterUser {
        name: "Alice".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Role::Member,
    }
}

// ============================================================================
// 利用者登録・認証・登録抹消の統合テスト
// ============================================================================

#[tokio::test]
async fn test_register_stores_user() {
    let ctx = setup(date(2024, 1, 1));

    let user = register(&ctx.deps, register_command("alice@example.com", "P@ssw0rd!"))
        .await
        .unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::Member);

    let found = find_user(&ctx.deps, user.user_id).await.unwrap();
    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let ctx = setup(date(2024, 1, 1));

    for email in ["not-an-email", "missing@", "@example.com", ""] {
        let result = register(&ctx.deps, register_command(email, "P@ssw0rd!")).await;
        assert!(
            matches!(result, Err(UserError::InvalidEmail)),
            "email {:?} should be rejected",
            email
        );
    }

    // バリデーション失敗は状態を変更しない
    assert!(ctx.user_repository.all().is_empty());
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let ctx = setup(date(2024, 1, 1));

    // 8文字未満、大文字なし、小文字なし、数字なし、特殊文字なし
    for password in ["P@ss1!", "p@ssw0rd!", "P@SSW0RD!", "P@ssword!", "Passw0rd1"] {
        let result = register(&ctx.deps, register_command("alice@example.com", password)).await;
        assert!(
            matches!(result, Err(UserError::InvalidPassword)),
            "password {:?} should be rejected",
            password
        );
    }
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_case_insensitively() {
    let ctx = setup(date(2024, 1, 1));

    register(&ctx.deps, register_command("alice@example.com", "P@ssw0rd!"))
        .await
        .unwrap();

    let result = register(&ctx.deps, register_command("ALICE@Example.COM", "P@ssw0rd!")).await;
    assert!(matches!(result, Err(UserError::EmailAlreadyRegistered)));

    assert_eq!(ctx.user_repository.all().len(), 1);
}

#[tokio::test]
async fn test_authenticate_matches_email_case_insensitively_and_password_exactly() {
    let ctx = setup(date(2024, 1, 1));

    let user = register(&ctx.deps, register_command("alice@example.com", "P@ssw0rd!"))
        .await
        .unwrap();

    // メールアドレスは大文字小文字を区別しない
    let found = authenticate(&ctx.deps, "ALICE@example.com", "P@ssw0rd!")
        .await
        .unwrap();
    assert_eq!(found, Some(user));

    // パスワードは完全一致
    assert_eq!(
        authenticate(&ctx.deps, "alice@example.com", "p@ssw0rd!")
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        authenticate(&ctx.deps, "unknown@example.com", "P@ssw0rd!")
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_unregister_removes_user_with_clean_record() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");

    unregister(&ctx.deps, UnregisterUser { user_id })
        .await
        .unwrap();

    assert_eq!(find_user(&ctx.deps, user_id).await.unwrap(), None);
}

#[tokio::test]
async fn test_unregister_rejected_while_loans_are_active() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");

    // 期限内でも未返却なら抹消できない
    ctx.loan_repository.seed(loan::create_loan(
        user_id,
        ctx.add_book("Borrowed Book"),
        MediaCategory::Book,
        date(2024, 1, 1),
    ));

    let result = unregister(&ctx.deps, UnregisterUser { user_id }).await;
    assert!(matches!(result, Err(UserError::HasActiveLoans)));

    // 利用者は残る
    assert!(find_user(&ctx.deps, user_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_unregister_rejected_while_fines_are_unpaid() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");

    ctx.fine_repository.seed(Fine::unpaid(user_id, 10.0));

    let result = unregister(&ctx.deps, UnregisterUser { user_id }).await;
    assert!(matches!(result, Err(UserError::HasUnpaidFines)));
}

#[tokio::test]
async fn test_unregister_failing_both_gates_reports_active_loans_first() {
    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");

    ctx.loan_repository.seed(loan::create_loan(
        user_id,
        ctx.add_book("Borrowed Book"),
        MediaCategory::Book,
        date(2024, 1, 1),
    ));
    ctx.fine_repository.seed(Fine::unpaid(user_id, 10.0));

    // 先勝ち：貸出側の失敗が返る
    let result = unregister(&ctx.deps, UnregisterUser { user_id }).await;
    assert!(matches!(result, Err(UserError::HasActiveLoans)));
}

#[tokio::test]
async fn test_unregister_unknown_user_fails() {
    let ctx = setup(date(2024, 1, 1));

    let result = unregister(
        &ctx.deps,
        UnregisterUser {
            user_id: UserId::new(),
        },
    )
    .await;

    assert!(matches!(result, Err(UserError::UserNotFound)));
}

#[tokio::test]
async fn test_unregister_allowed_once_loans_returned_and_fines_paid() {
    use lending_desk::application::fines::pay_fine;
    use lending_desk::application::lending::{borrow_item, return_item};
    use lending_desk::domain::commands::{BorrowItem, PayFine, ReturnItem};

    let ctx = setup(date(2024, 1, 1));
    let user_id = ctx.add_member("Alice", "alice@example.com");
    let item_id = ctx.add_book("Borrowed Book");

    let loan = borrow_item(
        &ctx.deps,
        BorrowItem {
            user_id,
            item_id,
            category: MediaCategory::Book,
        },
    )
    .await
    .unwrap();

    // 延滞して返却 → 罰金が残るのでまだ抹消できない
    ctx.clock.set_today(date(2024, 2, 1));
    return_item(&ctx.deps, ReturnItem { loan_id: loan.loan_id })
        .await
        .unwrap();
    let result = unregister(&ctx.deps, UnregisterUser { user_id }).await;
    assert!(matches!(result, Err(UserError::HasUnpaidFines)));

    // 支払えば抹消できる
    let fine_id = ctx.fine_repository.all()[0].fine_id;
    pay_fine(&ctx.deps, PayFine { fine_id }).await.unwrap();
    unregister(&ctx.deps, UnregisterUser { user_id })
        .await
        .unwrap();
}
