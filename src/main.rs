use chrono::Month;
use textbook::collections::binary_tree::BinarySearchTree;
use textbook::collections::contiguous::ArrayList;
use textbook::streams::{AccountQueries, sample};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("\n[ArrayList]\n");

    let mut list = ArrayList::with_cap(2);
    for i in 0..8 {
        list.push(i);
        println!("{:?}", list);
    }

    list.insert(2, 100);
    println!("{:?}", list);
    println!("{:?}, {:?}", list.remove(3), list);
    println!("{:?}", list.try_get(20));

    println!("\n[BinarySearchTree]\n");

    let mut tree = BinarySearchTree::from([5, 3, 8, 1, 4]);
    println!("{:?}", tree);
    println!("insert 4: {}, insert 9: {}", tree.insert(4), tree.insert(9));
    tree.in_order_traversal(|value| print!("{value} "));
    println!();

    println!("\n[Accounts]\n");

    let accounts = sample::accounts();
    let queries = AccountQueries::new(&accounts);

    if let Some(richest) = queries.richest() {
        println!("richest: {} {} ({})", richest.first_name, richest.last_name, richest.balance);
    }
    println!("total balance: {}", queries.total_balance());
    println!("born in April: {:?}", queries.first_names_by_birthday_month().get(&Month::April));
    for (domain, group) in queries.group_by_email_domain() {
        println!("{domain}: {}", group.len());
    }
    match queries.balance_by_email("nobody@example.com") {
        Ok(balance) => println!("balance: {balance}"),
        Err(error) => println!("{error}"),
    }
}
