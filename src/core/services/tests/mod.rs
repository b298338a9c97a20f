mod category_service_tests;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::Expense;

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub(super) fn expense(id: &str, amount: f64, category: &str, day: NaiveDate) -> Expense {
    Expense {
        id: id.into(),
        amount,
        category: category.into(),
        description: String::new(),
        date: day,
        created_at: at(2024, 1, 1, 12),
        updated_at: None,
    }
}
