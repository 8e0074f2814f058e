use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use chrono::{Datelike, Month};
use tracing::debug;

use super::{Account, AccountNotFound, Balance, DuplicateKey};
use crate::collections::contiguous::ArrayList;

/// Pure, read-only queries over a borrowed collection of accounts.
///
/// Every query walks the whole collection and returns a new structure, borrowing from the accounts
/// where possible. Running the same query twice always produces the same result.
///
/// # Examples
/// ```
/// # use textbook::streams::{sample, AccountQueries};
/// let accounts = sample::accounts();
/// let queries = AccountQueries::new(&accounts);
/// assert_eq!(queries.richest().map(|a| a.id), Some(1));
/// assert!(queries.contains_email_domain("yahoo.com"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccountQueries<'a> {
    accounts: &'a [Account],
}

impl<'a> AccountQueries<'a> {
    pub const fn new(accounts: &'a [Account]) -> AccountQueries<'a> {
        AccountQueries { accounts }
    }

    /// Returns the account with the largest balance. If several accounts share it, the first of
    /// them is returned.
    pub fn richest(&self) -> Option<&'a Account> {
        self.accounts.iter().reduce(|richest, account| {
            if account.balance > richest.balance {
                account
            } else {
                richest
            }
        })
    }

    /// Returns every account with a birthday in the provided month.
    pub fn by_birthday_month(&self, month: Month) -> ArrayList<&'a Account> {
        self.accounts
            .iter()
            .filter(|account| account.birthday_month() == month)
            .collect()
    }

    /// Splits the accounts into male (`true`) and female (`false`) accounts. Both keys are always
    /// present, even if one of the lists is empty.
    pub fn partition_by_sex(&self) -> HashMap<bool, ArrayList<&'a Account>> {
        let (male, female): (ArrayList<_>, ArrayList<_>) =
            self.accounts.iter().partition(|account| account.is_male());

        HashMap::from([(true, male), (false, female)])
    }

    /// Groups the accounts by the domain of their email address, like `"gmail.com"`.
    pub fn group_by_email_domain(&self) -> HashMap<&'a str, ArrayList<&'a Account>> {
        self.fold_groups(Account::email_domain, |group: &mut ArrayList<_>, account| {
            group.push(account)
        })
    }

    /// Returns the total number of characters in every first and last name.
    pub fn name_letter_count(&self) -> usize {
        self.accounts
            .iter()
            .map(|account| account.first_name.chars().count() + account.last_name.chars().count())
            .sum()
    }

    pub fn total_balance(&self) -> Balance {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    /// Returns the accounts sorted by first name, and then by last name. Accounts with identical
    /// names keep their original order.
    pub fn sorted_by_names(&self) -> ArrayList<&'a Account> {
        let mut sorted: ArrayList<_> = self.accounts.iter().collect();
        sorted.sort_by(|a, b| {
            a.first_name
                .cmp(&b.first_name)
                .then_with(|| a.last_name.cmp(&b.last_name))
        });
        sorted
    }

    /// Returns true if any account has an email address with exactly the provided domain.
    pub fn contains_email_domain(&self, domain: &str) -> bool {
        self.accounts
            .iter()
            .any(|account| account.email_domain() == domain)
    }

    /// Returns the balance of the first account with the provided email address.
    ///
    /// # Errors
    /// Returns [`AccountNotFound`] if no account has the email address.
    pub fn balance_by_email(&self, email: &str) -> Result<Balance, AccountNotFound> {
        self.accounts
            .iter()
            .find(|account| account.email == email)
            .map(|account| account.balance)
            .ok_or_else(|| {
                debug!(email, "no account found for email");
                AccountNotFound {
                    email: email.to_owned(),
                }
            })
    }

    /// Indexes the accounts by id.
    ///
    /// # Errors
    /// Returns [`DuplicateKey`] if two accounts share an id.
    pub fn by_id(&self) -> Result<HashMap<u64, &'a Account>, DuplicateKey> {
        collect_unique(self.accounts.iter(), |account| account.id, |account| account)
    }

    /// Maps the email address of every account created in `year` to its balance.
    ///
    /// # Errors
    /// Returns [`DuplicateKey`] if two accounts created in `year` share an email address.
    pub fn balances_by_email_created_in(
        &self,
        year: i32,
    ) -> Result<HashMap<&'a str, Balance>, DuplicateKey> {
        collect_unique(
            self.accounts
                .iter()
                .filter(|account| account.creation_date.year() == year),
            |account| account.email.as_str(),
            |account| account.balance,
        )
    }

    /// Maps every last name to the set of first names of accounts with that last name.
    pub fn first_names_by_last_name(&self) -> HashMap<&'a str, HashSet<&'a str>> {
        self.fold_groups(
            |account| account.last_name.as_str(),
            |names: &mut HashSet<_>, account| {
                names.insert(account.first_name.as_str());
            },
        )
    }

    /// Maps every birthday month to the first names of the accounts born in it, separated by
    /// `", "`, like `"Polly, Dylan, Clark"`.
    pub fn first_names_by_birthday_month(&self) -> HashMap<Month, String> {
        self.fold_groups(Account::birthday_month, |names: &mut String, account| {
            if !names.is_empty() {
                names.push_str(", ");
            }
            names.push_str(&account.first_name);
        })
    }

    /// Maps every month in which accounts were created to the total balance of those accounts.
    pub fn total_balance_by_creation_month(&self) -> HashMap<Month, Balance> {
        self.fold_groups(Account::creation_month, |total: &mut Balance, account| {
            *total = *total + account.balance;
        })
    }

    /// Counts the occurrences of every character in all first names. Upper and lower case
    /// characters are counted separately.
    pub fn first_name_char_frequency(&self) -> HashMap<char, u64> {
        count_chars(
            self.accounts
                .iter()
                .flat_map(|account| account.first_name.chars()),
        )
    }

    /// Counts the occurrences of every character in all first and last names that are at least
    /// `min_len` characters long, ignoring case. All keys are lower case.
    pub fn char_frequency_ignore_case(&self, min_len: usize) -> HashMap<char, u64> {
        count_chars(
            self.accounts
                .iter()
                .flat_map(|account| [account.first_name.as_str(), account.last_name.as_str()])
                .filter(|name| name.chars().count() >= min_len)
                .flat_map(|name| name.chars().flat_map(char::to_lowercase)),
        )
    }

    /// Groups the accounts by `key`, folding each account into the accumulator for its group with
    /// `fold`. Each accumulator starts as its default value.
    fn fold_groups<K, A, F, G>(&self, key: F, mut fold: G) -> HashMap<K, A>
    where
        K: Eq + Hash,
        A: Default,
        F: Fn(&'a Account) -> K,
        G: FnMut(&mut A, &'a Account),
    {
        let mut groups = HashMap::new();
        for account in self.accounts {
            fold(groups.entry(key(account)).or_default(), account);
        }
        groups
    }
}

fn collect_unique<'a, K, V>(
    accounts: impl Iterator<Item = &'a Account>,
    key: impl Fn(&'a Account) -> K,
    value: impl Fn(&'a Account) -> V,
) -> Result<HashMap<K, V>, DuplicateKey>
where
    K: Eq + Hash + Display,
{
    let mut map = HashMap::new();
    for account in accounts {
        match map.entry(key(account)) {
            Entry::Occupied(entry) => {
                debug!(key = %entry.key(), "duplicate key while collecting accounts");
                return Err(DuplicateKey {
                    key: entry.key().to_string(),
                });
            },
            Entry::Vacant(entry) => {
                entry.insert(value(account));
            },
        }
    }
    Ok(map)
}

fn count_chars(chars: impl Iterator<Item = char>) -> HashMap<char, u64> {
    let mut frequency = HashMap::new();
    for c in chars {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}
