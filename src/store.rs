// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ledger::Ledger;
use crate::models::{Account, FixedExpense, Goal, Transaction};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketbook", "pocketbook"));

const JOURNAL_FILE: &str = "transactions.csv";
const REGISTRY_FILE: &str = "ledger.json";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

/// The accounts/fixed/goals registries live in a small JSON sidecar:
/// balances mutate in place, so the append-only journal alone cannot
/// reproduce them.
#[derive(Serialize, Deserialize, Default)]
struct Registries {
    accounts: Vec<Account>,
    fixed_expenses: Vec<FixedExpense>,
    goals: Vec<Goal>,
}

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open_default() -> Result<Self> {
        Self::open_at(data_dir()?)
    }

    pub fn open_at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn journal_path(&self) -> PathBuf {
        self.dir.join(JOURNAL_FILE)
    }

    fn registry_path(&self) -> PathBuf {
        self.dir.join(REGISTRY_FILE)
    }

    /// Missing files are a normal first run, not an error. Journal rows
    /// are already reflected in the stored balances, so loading pushes
    /// them directly and must not re-debit.
    pub fn load(&self) -> Result<Ledger> {
        let mut ledger = Ledger::new();

        let path = self.journal_path();
        if path.exists() {
            let mut rdr = csv::Reader::from_path(&path)
                .with_context(|| format!("Open journal {}", path.display()))?;
            for rec in rdr.deserialize() {
                let tx: Transaction =
                    rec.with_context(|| format!("Malformed row in {}", path.display()))?;
                ledger.transactions.push(tx);
            }
        }

        let path = self.registry_path();
        if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Read {}", path.display()))?;
            let reg: Registries = serde_json::from_str(&raw)
                .with_context(|| format!("Malformed registry file {}", path.display()))?;
            ledger.accounts = reg.accounts;
            ledger.fixed_expenses = reg.fixed_expenses;
            ledger.goals = reg.goals;
        }

        Ok(ledger)
    }

    /// Appends a single journal row; the header is written only when
    /// the file is new.
    pub fn append_transaction(&self, tx: &Transaction) -> Result<()> {
        let path = self.journal_path();
        let new_file = !path.exists();
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Open journal {}", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(new_file)
            .from_writer(file);
        wtr.serialize(tx)
            .with_context(|| format!("Write journal row to {}", path.display()))?;
        wtr.flush()
            .with_context(|| format!("Flush journal {}", path.display()))?;
        Ok(())
    }

    pub fn save_registries(&self, ledger: &Ledger) -> Result<()> {
        let reg = Registries {
            accounts: ledger.accounts.clone(),
            fixed_expenses: ledger.fixed_expenses.clone(),
            goals: ledger.goals.clone(),
        };
        let path = self.registry_path();
        fs::write(&path, serde_json::to_string_pretty(&reg)?)
            .with_context(|| format!("Write {}", path.display()))?;
        Ok(())
    }
}
