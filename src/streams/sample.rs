//! A small, fixed set of accounts to run queries against.

use chrono::NaiveDate;

use super::{Account, Balance, Sex};
use crate::collections::contiguous::ArrayList;

struct Row {
    id: u64,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    birthday: NaiveDate,
    sex: Sex,
    creation_date: NaiveDate,
    balance: Balance,
}

/// Builds a date at compile time, so that a typo in the table below fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const ROWS: [Row; 8] = [
    Row {
        id: 1,
        first_name: "Justin",
        last_name: "Butler",
        email: "justin.butler@gmail.com",
        birthday: date(2003, 4, 17),
        sex: Sex::Male,
        creation_date: date(2016, 6, 13),
        balance: Balance::from_units(172_966),
    },
    Row {
        id: 2,
        first_name: "Olivia",
        last_name: "Cardenas",
        email: "cardenas@mail.com",
        birthday: date(1930, 1, 19),
        sex: Sex::Female,
        creation_date: date(2014, 6, 21),
        balance: Balance::from_units(38_029),
    },
    Row {
        id: 3,
        first_name: "Nolan",
        last_name: "Donovan",
        email: "nolandonovan@gmail.com",
        birthday: date(1925, 4, 19),
        sex: Sex::Male,
        creation_date: date(2011, 3, 10),
        balance: Balance::from_units(13_889),
    },
    Row {
        id: 4,
        first_name: "Lucas",
        last_name: "Lynn",
        email: "lucas.lynn@yahoo.com",
        birthday: date(1987, 5, 25),
        sex: Sex::Male,
        creation_date: date(2009, 3, 5),
        balance: Balance::from_units(16_980),
    },
    Row {
        id: 5,
        first_name: "Polly",
        last_name: "Lynn",
        email: "polly.lynn@yahoo.com",
        birthday: date(1990, 4, 2),
        sex: Sex::Female,
        creation_date: date(2016, 1, 30),
        balance: Balance::from_cents(5_421_050),
    },
    Row {
        id: 6,
        first_name: "Dylan",
        last_name: "Butler",
        email: "dylan@mail.com",
        birthday: date(1999, 11, 11),
        sex: Sex::Male,
        creation_date: date(2016, 6, 1),
        balance: Balance::from_cents(201_525),
    },
    Row {
        id: 7,
        first_name: "Clark",
        last_name: "Kent",
        email: "clark.kent@dailyplanet.com",
        birthday: date(1978, 6, 18),
        sex: Sex::Male,
        creation_date: date(2014, 12, 24),
        balance: Balance::from_units(172_966),
    },
    Row {
        id: 8,
        first_name: "Lana",
        last_name: "Kent",
        email: "lana@gmail.com",
        birthday: date(1981, 4, 9),
        sex: Sex::Female,
        creation_date: date(2011, 3, 17),
        balance: Balance::from_cents(9_999),
    },
];

/// Returns the sample accounts, in id order.
pub fn accounts() -> ArrayList<Account> {
    ROWS.iter()
        .map(|row| Account {
            id: row.id,
            first_name: row.first_name.to_owned(),
            last_name: row.last_name.to_owned(),
            email: row.email.to_owned(),
            birthday: row.birthday,
            sex: row.sex,
            creation_date: row.creation_date,
            balance: row.balance,
        })
        .collect()
}
