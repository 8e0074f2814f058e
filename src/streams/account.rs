use chrono::{Datelike, Month, NaiveDate};
use derive_more::{Display, IsVariant};

use super::Balance;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum Sex {
    Male,
    Female,
}

/// A single, immutable account record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: NaiveDate,
    pub sex: Sex,
    pub creation_date: NaiveDate,
    pub balance: Balance,
}

impl Account {
    /// Returns the part of the email address after the first `@`, or the whole address if it
    /// doesn't contain one.
    ///
    /// # Examples
    /// ```
    /// # use textbook::streams::sample;
    /// let accounts = sample::accounts();
    /// assert_eq!(accounts[0].email, "justin.butler@gmail.com");
    /// assert_eq!(accounts[0].email_domain(), "gmail.com");
    /// ```
    pub fn email_domain(&self) -> &str {
        match self.email.split_once('@') {
            Some((_, domain)) => domain,
            None => &self.email,
        }
    }

    pub fn birthday_month(&self) -> Month {
        month_of(self.birthday)
    }

    pub fn creation_month(&self) -> Month {
        month_of(self.creation_date)
    }

    pub fn is_male(&self) -> bool {
        self.sex.is_male()
    }
}

fn month_of(date: NaiveDate) -> Month {
    // month0 is always in 0..12.
    MONTHS[date.month0() as usize]
}
