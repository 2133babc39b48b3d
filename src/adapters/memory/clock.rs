use std::sync::Mutex;

use chrono::NaiveDate;

use crate::ports::clock::Clock;

/// Clockの固定日付実装
///
/// テストから「今日」を自由に設定できる。延滞判定を決定的にする。
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// 基準日を差し替える（時間経過のシミュレーション）
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock().unwrap() = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}
