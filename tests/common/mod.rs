#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use lending_desk::adapters::memory::{
    Catalog, FineRepository, FixedClock, LoanRepository, NotificationSender, UserRepository,
};
use lending_desk::application::ServiceDependencies;
use lending_desk::domain::fine::FineCalculator;
use lending_desk::domain::item::{Book, Cd, Item};
use lending_desk::domain::user::User;
use lending_desk::domain::value_objects::{ItemId, Role, UserId};

/// テスト用の依存関係一式
///
/// ServiceDependenciesはdynトレイトしか持たないため、
/// シードや検証のために具象アダプターへの参照も併せて保持する。
pub struct TestContext {
    pub deps: ServiceDependencies,
    pub loan_repository: Arc<LoanRepository>,
    pub fine_repository: Arc<FineRepository>,
    pub user_repository: Arc<UserRepository>,
    pub catalog: Arc<Catalog>,
    pub notification_sender: Arc<NotificationSender>,
    pub clock: Arc<FixedClock>,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// インメモリアダプターで依存関係を組み立てる
pub fn setup(today: NaiveDate) -> TestContext {
    let loan_repository = Arc::new(LoanRepository::new());
    let fine_repository = Arc::new(FineRepository::new());
    let user_repository = Arc::new(UserRepository::new());
    let catalog = Arc::new(Catalog::new());
    let notification_sender = Arc::new(NotificationSender::new());
    let clock = Arc::new(FixedClock::new(today));

    let deps = ServiceDependencies {
        loan_repository: loan_repository.clone(),
        fine_repository: fine_repository.clone(),
        user_repository: user_repository.clone(),
        catalog: catalog.clone(),
        notification_sender: notification_sender.clone(),
        clock: clock.clone(),
        fine_calculator: Arc::new(FineCalculator::new()),
    };

    TestContext {
        deps,
        loan_repository,
        fine_repository,
        user_repository,
        catalog,
        notification_sender,
        clock,
    }
}

impl TestContext {
    /// 一般利用者をシードする
    pub fn add_member(&self, name: &str, email: &str) -> UserId {
        let user_id = UserId::new();
        self.user_repository.seed(User {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            password: "P@ssw0rd!".to_string(),
            role: Role::Member,
        });
        user_id
    }

    /// 貸出可能な書籍をシードする
    pub fn add_book(&self, title: &str) -> ItemId {
        let item_id = ItemId::new();
        self.catalog.add_item(Item::Book(Book {
            item_id,
            title: title.to_string(),
            author: "Test Author".to_string(),
            isbn: "978-0000000000".to_string(),
            borrowed: false,
        }));
        item_id
    }

    /// 貸出可能なCDをシードする
    pub fn add_cd(&self, title: &str) -> ItemId {
        let item_id = ItemId::new();
        self.catalog.add_item(Item::Cd(Cd {
            item_id,
            title: title.to_string(),
            artist: "Test Artist".to_string(),
            borrowed: false,
        }));
        item_id
    }
}
