use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use lending_desk::adapters::json_file::{
    JsonFileCatalog, JsonFileFineRepository, JsonFileLoanRepository, JsonFileUserRepository,
};
use lending_desk::domain::fine::Fine;
use lending_desk::domain::item::{Book, Cd, Item};
use lending_desk::domain::loan;
use lending_desk::domain::user::User;
use lending_desk::domain::value_objects::{ItemId, MediaCategory, Role, UserId};
use lending_desk::ports::{
    Catalog, FineRepository, LoanRepository, UserRepository,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// テストごとに独立したデータディレクトリを払い出す
fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("lending-desk-test-{}", Uuid::new_v4()))
}

// ============================================================================
// JSONファイル永続化の統合テスト
// ============================================================================

#[tokio::test]
async fn test_load_all_returns_empty_when_file_is_missing() {
    let dir = temp_data_dir();

    // 初回起動：スナップショットファイルはまだ存在しない
    let loans = JsonFileLoanRepository::new(&dir).load_all().await.unwrap();
    assert!(loans.is_empty());

    let fines = JsonFileFineRepository::new(&dir).load_all().await.unwrap();
    assert!(fines.is_empty());

    let users = JsonFileUserRepository::new(&dir).load_all().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_loans_survive_a_save_load_cycle() {
    let dir = temp_data_dir();
    let repository = JsonFileLoanRepository::new(&dir);

    let open_loan = loan::create_loan(
        UserId::new(),
        ItemId::new(),
        MediaCategory::Book,
        date(2024, 1, 1),
    );
    let returned_loan = loan::return_loan(
        &loan::create_loan(
            UserId::new(),
            ItemId::new(),
            MediaCategory::Cd,
            date(2024, 1, 1),
        ),
        date(2024, 1, 10),
    )
    .unwrap();

    repository
        .save_all(vec![open_loan.clone(), returned_loan.clone()])
        .await
        .unwrap();

    // 別のインスタンスからも同じスナップショットが見える
    let reloaded = JsonFileLoanRepository::new(&dir).load_all().await.unwrap();
    assert_eq!(reloaded, vec![open_loan, returned_loan]);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_fines_survive_a_save_load_cycle() {
    let dir = temp_data_dir();
    let repository = JsonFileFineRepository::new(&dir);

    let mut paid_fine = Fine::unpaid(UserId::new(), 20.0);
    paid_fine.paid = true;
    let fines = vec![Fine::unpaid(UserId::new(), 10.0), paid_fine];

    repository.save_all(fines.clone()).await.unwrap();

    let reloaded = repository.load_all().await.unwrap();
    assert_eq!(reloaded, fines);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_users_survive_a_save_load_cycle() {
    let dir = temp_data_dir();
    let repository = JsonFileUserRepository::new(&dir);

    let users = vec![User {
        user_id: UserId::new(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "P@ssw0rd!".to_string(),
        role: Role::Librarian,
    }];

    repository.save_all(users.clone()).await.unwrap();

    let reloaded = repository.load_all().await.unwrap();
    assert_eq!(reloaded, users);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_catalog_set_borrowed_persists_flag() {
    let dir = temp_data_dir();

    let book_id = ItemId::new();
    let cd_id = ItemId::new();
    let items = vec![
        Item::Book(Book {
            item_id: book_id,
            title: "Domain-Driven Design".to_string(),
            author: "Eric Evans".to_string(),
            isbn: "978-0321125217".to_string(),
            borrowed: false,
        }),
        Item::Cd(Cd {
            item_id: cd_id,
            title: "Kind of Blue".to_string(),
            artist: "Miles Davis".to_string(),
            borrowed: false,
        }),
    ];

    // items.jsonを直接用意する（蔵書の投入は運用側の操作）
    tokio::fs::create_dir_all(&dir).await.unwrap();
    tokio::fs::write(
        dir.join("items.json"),
        serde_json::to_vec_pretty(&items).unwrap(),
    )
    .await
    .unwrap();

    let catalog = JsonFileCatalog::new(&dir);
    catalog.set_borrowed(book_id, true).await.unwrap();

    // 別のインスタンスからも更新後のフラグが見える
    let reopened = JsonFileCatalog::new(&dir);
    let book = reopened.find_item(book_id).await.unwrap().unwrap();
    assert!(book.is_borrowed());

    // 他の資料は変更されない
    let cd = reopened.find_item(cd_id).await.unwrap().unwrap();
    assert!(!cd.is_borrowed());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_catalog_set_borrowed_fails_for_unknown_item() {
    let dir = temp_data_dir();
    let catalog = JsonFileCatalog::new(&dir);

    let result = catalog.set_borrowed(ItemId::new(), true).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_catalog_find_item_returns_none_when_file_is_missing() {
    let dir = temp_data_dir();
    let catalog = JsonFileCatalog::new(&dir);

    let found = catalog.find_item(ItemId::new()).await.unwrap();
    assert!(found.is_none());
}
