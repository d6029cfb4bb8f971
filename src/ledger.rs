// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, FixedExpense, Goal, Transaction, TxKind};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Amount '{0}' must not be negative")]
    NegativeAmount(Decimal),
    #[error("Account '{0}' not found")]
    UnknownAccount(String),
    #[error("Account '{0}' already exists")]
    DuplicateAccount(String),
}

/// The canonical session state: all collections live here and are owned
/// by whoever opened the session, never in ambient globals.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub fixed_expenses: Vec<FixedExpense>,
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    fn account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.name == name)
    }

    /// Records a transaction. An expense naming an account debits it in
    /// the same call; a failed validation leaves the ledger untouched.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        if tx.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(tx.amount));
        }
        if let Some(name) = tx.account.as_deref() {
            if self.account(name).is_none() {
                return Err(LedgerError::UnknownAccount(name.to_string()));
            }
            if tx.kind == TxKind::Expense {
                self.debit_account(name, tx.amount)?;
            }
        }
        self.transactions.push(tx);
        Ok(())
    }

    pub fn add_account(&mut self, name: &str, initial_balance: Decimal) -> Result<(), LedgerError> {
        if self.account(name).is_some() {
            return Err(LedgerError::DuplicateAccount(name.to_string()));
        }
        self.accounts.push(Account {
            name: name.to_string(),
            balance: initial_balance,
        });
        Ok(())
    }

    /// Amounts of zero or less are a silent no-op; the account must
    /// still resolve.
    pub fn top_up_account(&mut self, name: &str, amount: Decimal) -> Result<(), LedgerError> {
        let acct = self
            .account_mut(name)
            .ok_or_else(|| LedgerError::UnknownAccount(name.to_string()))?;
        if amount > Decimal::ZERO {
            acct.balance += amount;
        }
        Ok(())
    }

    /// Accumulates staged amounts per account, then applies one top-up
    /// per account. Every name is resolved before anything is applied.
    pub fn top_up_many<'a, I>(&mut self, stages: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = (&'a str, Decimal)>,
    {
        let mut staged: BTreeMap<&str, Decimal> = BTreeMap::new();
        for (name, amount) in stages {
            if self.account(name).is_none() {
                return Err(LedgerError::UnknownAccount(name.to_string()));
            }
            *staged.entry(name).or_insert(Decimal::ZERO) += amount;
        }
        for (name, amount) in staged {
            self.top_up_account(name, amount)?;
        }
        Ok(())
    }

    /// No floor check: balances may go negative. `doctor` reports
    /// overdrawn accounts instead of this call rejecting them.
    pub fn debit_account(&mut self, name: &str, amount: Decimal) -> Result<(), LedgerError> {
        let acct = self
            .account_mut(name)
            .ok_or_else(|| LedgerError::UnknownAccount(name.to_string()))?;
        acct.balance -= amount;
        Ok(())
    }

    pub fn add_fixed_expense(&mut self, name: &str, amount: Decimal) -> Result<(), LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(amount));
        }
        self.fixed_expenses.push(FixedExpense {
            name: name.to_string(),
            amount,
        });
        Ok(())
    }

    pub fn add_goal(
        &mut self,
        name: &str,
        target: Decimal,
        current: Decimal,
    ) -> Result<(), LedgerError> {
        if target < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(target));
        }
        if current < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount(current));
        }
        self.goals.push(Goal {
            name: name.to_string(),
            target,
            current,
        });
        Ok(())
    }
}
