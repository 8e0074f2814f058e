#![cfg(test)]

use std::collections::HashSet;

use chrono::{Month, NaiveDate};

use super::*;
use crate::collections::contiguous::ArrayList;

fn ids(accounts: &[&Account]) -> ArrayList<u64> {
    accounts.iter().map(|account| account.id).collect()
}

fn account(id: u64, first_name: &str, last_name: &str, email: &str, cents: i64) -> Account {
    let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
    Account {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        birthday: date,
        sex: Sex::Female,
        creation_date: date,
        balance: Balance::from_cents(cents),
    }
}

#[test]
fn test_richest() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);
    assert_eq!(
        queries.richest().map(|a| a.id),
        Some(1),
        "The first of two accounts with the largest balance should win."
    );

    assert!(AccountQueries::new(&[]).richest().is_none());
}

#[test]
fn test_by_birthday_month() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    assert_eq!(*ids(&queries.by_birthday_month(Month::April)), [1, 3, 5, 8]);
    assert_eq!(*ids(&queries.by_birthday_month(Month::January)), [2]);
    assert!(queries.by_birthday_month(Month::February).is_empty());
}

#[test]
fn test_partition_by_sex() {
    let accounts = sample::accounts();
    let partition = AccountQueries::new(&accounts).partition_by_sex();

    assert_eq!(*ids(&partition[&true]), [1, 3, 4, 6, 7]);
    assert_eq!(*ids(&partition[&false]), [2, 5, 8]);

    let males = [account(1, "A", "B", "a@b", 0)]
        .map(|account| Account { sex: Sex::Male, ..account });
    let partition = AccountQueries::new(&males).partition_by_sex();
    assert!(partition[&false].is_empty(), "Both keys should be present, even when empty.");
}

#[test]
fn test_group_by_email_domain() {
    let accounts = sample::accounts();
    let groups = AccountQueries::new(&accounts).group_by_email_domain();

    assert_eq!(groups.len(), 4);
    assert_eq!(*ids(&groups["gmail.com"]), [1, 3, 8]);
    assert_eq!(*ids(&groups["mail.com"]), [2, 6]);
    assert_eq!(*ids(&groups["yahoo.com"]), [4, 5]);
    assert_eq!(*ids(&groups["dailyplanet.com"]), [7]);

    // Every account lands in exactly one group, which matches its domain.
    let mut seen = HashSet::new();
    for (domain, group) in &groups {
        for account in group.iter() {
            assert!(account.email.ends_with(&format!("@{domain}")));
            assert!(seen.insert(account.id), "An account should only be in one group.");
        }
    }
    assert_eq!(seen.len(), accounts.len());
}

#[test]
fn test_email_domain_edge_cases() {
    assert_eq!(account(1, "A", "B", "a@b@c", 0).email_domain(), "b@c");
    assert_eq!(account(1, "A", "B", "no-at-sign", 0).email_domain(), "no-at-sign");
}

#[test]
fn test_sums() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    assert_eq!(queries.name_letter_count(), 84);
    assert_eq!(queries.total_balance(), Balance::from_cents(47_115_574));
    assert_eq!(queries.total_balance().to_string(), "471155.74");

    let empty = AccountQueries::new(&[]);
    assert_eq!(empty.name_letter_count(), 0);
    assert_eq!(empty.total_balance(), Balance::ZERO);

    let accents = [account(1, "Zoë", "Ångström", "z@a", 0)];
    assert_eq!(
        AccountQueries::new(&accents).name_letter_count(),
        11,
        "Letters should be counted as characters, not bytes."
    );
}

#[test]
fn test_sorted_by_names() {
    let accounts = sample::accounts();
    let sorted = AccountQueries::new(&accounts).sorted_by_names();
    assert_eq!(*ids(&sorted), [7, 6, 1, 8, 4, 3, 2, 5]);

    let accounts = [
        account(1, "Ann", "Smith", "1@x", 0),
        account(2, "Ann", "Jones", "2@x", 0),
        account(3, "Al", "Zed", "3@x", 0),
        account(4, "Ann", "Jones", "4@x", 0),
    ];
    let sorted = AccountQueries::new(&accounts).sorted_by_names();
    assert_eq!(
        *ids(&sorted),
        [3, 2, 4, 1],
        "Ties on first name should be broken by last name, then by original order."
    );
}

#[test]
fn test_contains_email_domain() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    assert!(queries.contains_email_domain("yahoo.com"));
    assert!(!queries.contains_email_domain("gmail"), "Only whole domains should match.");
    assert!(!queries.contains_email_domain("outlook.com"));
}

#[test]
fn test_balance_by_email() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    assert_eq!(
        queries.balance_by_email("polly.lynn@yahoo.com"),
        Ok(Balance::from_cents(5_421_050))
    );

    let error = queries.balance_by_email("nobody@example.com").unwrap_err();
    assert_eq!(error.to_string(), "Cannot find Account by email=nobody@example.com");
}

#[test]
fn test_by_id() {
    let accounts = sample::accounts();
    let by_id = AccountQueries::new(&accounts).by_id().unwrap();

    assert_eq!(by_id.len(), 8);
    assert_eq!(by_id[&7].first_name, "Clark");

    let accounts = [account(1, "A", "B", "1@x", 0), account(1, "C", "D", "2@x", 0)];
    assert_eq!(
        AccountQueries::new(&accounts).by_id(),
        Err(DuplicateKey {
            key: String::from("1")
        })
    );
}

#[test]
fn test_balances_by_email_created_in() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    let balances = queries.balances_by_email_created_in(2016).unwrap();
    assert_eq!(balances.len(), 3);
    assert_eq!(balances["justin.butler@gmail.com"], Balance::from_cents(17_296_600));
    assert_eq!(balances["polly.lynn@yahoo.com"], Balance::from_cents(5_421_050));
    assert_eq!(balances["dylan@mail.com"], Balance::from_cents(201_525));

    assert!(queries.balances_by_email_created_in(2020).unwrap().is_empty());

    let accounts = [account(1, "A", "B", "same@x", 1), account(2, "C", "D", "same@x", 2)];
    let error = AccountQueries::new(&accounts)
        .balances_by_email_created_in(2020)
        .unwrap_err();
    assert_eq!(error.to_string(), "Duplicate key same@x");
}

#[test]
fn test_first_names_by_last_name() {
    let accounts = sample::accounts();
    let names = AccountQueries::new(&accounts).first_names_by_last_name();

    assert_eq!(names.len(), 5);
    assert_eq!(names["Butler"], HashSet::from(["Justin", "Dylan"]));
    assert_eq!(names["Lynn"], HashSet::from(["Lucas", "Polly"]));
    assert_eq!(names["Kent"], HashSet::from(["Clark", "Lana"]));
    assert_eq!(names["Cardenas"], HashSet::from(["Olivia"]));
}

#[test]
fn test_first_names_by_birthday_month() {
    let accounts = sample::accounts();
    let names = AccountQueries::new(&accounts).first_names_by_birthday_month();

    assert_eq!(names.len(), 5);
    assert_eq!(names[&Month::April], "Justin, Nolan, Polly, Lana");
    assert_eq!(names[&Month::June], "Clark");
    assert!(!names.contains_key(&Month::February));
}

#[test]
fn test_total_balance_by_creation_month() {
    let accounts = sample::accounts();
    let totals = AccountQueries::new(&accounts).total_balance_by_creation_month();

    assert_eq!(totals.len(), 4);
    assert_eq!(totals[&Month::June], Balance::from_cents(21_301_025));
    assert_eq!(totals[&Month::March], Balance::from_cents(3_096_899));
    assert_eq!(totals[&Month::January], Balance::from_cents(5_421_050));
    assert_eq!(totals[&Month::December], Balance::from_cents(17_296_600));
}

#[test]
fn test_first_name_char_frequency() {
    let accounts = sample::accounts();
    let frequency = AccountQueries::new(&accounts).first_name_char_frequency();

    assert_eq!(frequency[&'a'], 7);
    assert_eq!(frequency[&'l'], 6);
    assert_eq!(frequency[&'L'], 2, "Case should be significant.");
    assert_eq!(frequency[&'i'], 3);
    assert_eq!(frequency.values().sum::<u64>(), 41);
}

#[test]
fn test_char_frequency_ignore_case() {
    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    let frequency = queries.char_frequency_ignore_case(6);
    assert_eq!(frequency[&'n'], 4);
    assert_eq!(frequency[&'b'], 2);
    assert_eq!(frequency[&'a'], 4);
    assert_eq!(frequency[&'o'], 3);
    assert_eq!(frequency.values().sum::<u64>(), 39, "Short names should be skipped.");
    assert!(frequency.keys().all(|c| !c.is_uppercase()));

    let frequency = queries.char_frequency_ignore_case(0);
    assert_eq!(frequency[&'l'], 12);
    assert_eq!(frequency.values().sum::<u64>(), 84);
}
