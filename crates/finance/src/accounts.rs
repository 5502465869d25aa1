use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tradebook_records::{Category, Transaction};

/// Net position of one ledger account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account: String,
    pub balance: f64,
}

/// Income minus expense per account, in order of first appearance.
///
/// Transactions without an account are grouped under `"unknown"`.
pub fn account_balances<'a, I>(transactions: I) -> Vec<AccountBalance>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    // (account, income, expense); netted once at the end.
    let mut order: Vec<(&'a str, f64, f64)> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for tx in transactions {
        let key = tx.account_key();
        let slot = *slots.entry(key).or_insert_with(|| {
            order.push((key, 0.0, 0.0));
            order.len() - 1
        });

        match tx.category {
            Category::Income => order[slot].1 += tx.amount,
            Category::Expense => order[slot].2 += tx.amount,
            Category::Other(_) => {}
        }
    }

    order
        .into_iter()
        .map(|(account, income, expense)| AccountBalance {
            account: account.to_string(),
            balance: income - expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{financial_summary, fixtures};
    use proptest::prelude::*;
    use serde_json::json;
    use tradebook_records::TransactionKind;

    #[test]
    fn balances_follow_first_seen_order() {
        let txs = fixtures::transactions(json!([
            {"category": "income", "amount": 100, "account": "bank"},
            {"category": "income", "amount": 40, "account": "cash"},
            {"category": "expense", "amount": 30, "account": "bank"},
            {"category": "expense", "amount": 5},
            {"category": "transfer", "amount": 999, "account": "cash"}
        ]));

        let balances = account_balances(&txs);
        let got: Vec<(&str, f64)> = balances
            .iter()
            .map(|b| (b.account.as_str(), b.balance))
            .collect();
        assert_eq!(got, vec![("bank", 70.0), ("cash", 40.0), ("unknown", -5.0)]);
    }

    #[test]
    fn fractional_amounts_net_after_summing_each_side() {
        let txs = fixtures::transactions(json!([
            {"category": "income", "amount": 0.1, "account": "till"},
            {"category": "expense", "amount": 0.3, "account": "till"},
            {"category": "income", "amount": 0.2, "account": "till"}
        ]));

        let balances = account_balances(&txs);
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].balance, (0.1 + 0.2) - 0.3);
    }

    #[test]
    fn empty_ledger_has_no_accounts() {
        let empty: Vec<Transaction> = Vec::new();
        assert!(account_balances(&empty).is_empty());
    }

    fn arb_transaction() -> impl Strategy<Value = Transaction> {
        let account = prop_oneof![Just("cash"), Just("bank"), Just("card")];
        let category = prop_oneof![Just(Category::Income), Just(Category::Expense)];
        (account, category, 0u32..5_000_000).prop_map(|(account, category, cents)| {
            Transaction::new(TransactionKind::Sale, category, f64::from(cents) / 100.0)
                .with_account(account)
        })
    }

    proptest! {
        #[test]
        fn one_entry_per_account_and_sums_reconcile(txs in prop::collection::vec(arb_transaction(), 0..64)) {
            let balances = account_balances(&txs);

            let mut distinct: Vec<&str> = txs.iter().map(|t| t.account_key()).collect();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(balances.len(), distinct.len());

            let total = balances.iter().fold(0.0, |acc, b| acc + b.balance);
            let s = financial_summary(&txs);
            prop_assert!((total - (s.income_total - s.expense_total)).abs() < 1e-6);

            for b in &balances {
                let on_account: Vec<&Transaction> =
                    txs.iter().filter(|t| t.account_key() == b.account).collect();
                let per_account = financial_summary(on_account.iter().copied());
                prop_assert_eq!(b.balance, per_account.income_total - per_account.expense_total);
            }
        }
    }
}
