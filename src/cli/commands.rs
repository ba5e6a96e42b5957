use std::{path::Path, str::FromStr};

use rust_decimal::Decimal;

use crate::cli::table::{Table, TableColumn};
use crate::cli::{AddArgs, Output};
use crate::config::{Config, ConfigManager};
use crate::core::{Aggregator, LedgerStore};
use crate::errors::{ConfigError, LedgerError, Result};
use crate::ledger::{parse_timestamp, Transaction, TransactionKind};
use crate::storage::LegacyExport;
use crate::utils::build_info;

pub fn add(store: &mut LedgerStore, out: &Output, args: AddArgs) -> Result<()> {
    let amount = Decimal::from_str(args.amount.trim()).map_err(|err| {
        LedgerError::validation("amount", format!("`{}` is not a number ({err})", args.amount))
    })?;
    let kind = if args.income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };
    let created_at = args.at.as_deref().map(parse_timestamp).transpose()?;
    let transaction = Transaction::new(amount, &args.category, kind, &args.description, created_at)?;
    let message = format!(
        "Transaction ({} {} of {}) added",
        transaction.category(),
        transaction.kind(),
        out.money(transaction.amount())
    );
    store.append(transaction)?;
    out.success(message);
    Ok(())
}

pub fn list(store: &LedgerStore, out: &Output) {
    if store.all().is_empty() {
        out.info("No transactions recorded yet.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::right("Amount"),
        TableColumn::left("Created"),
        TableColumn::left("Type"),
        TableColumn::left("Category"),
        TableColumn::left("Description"),
    ]);
    for (idx, txn) in store.all().iter().enumerate() {
        table.push_row(vec![
            (idx + 1).to_string(),
            out.money(txn.amount()),
            txn.created_at_label(),
            txn.kind().to_string(),
            txn.category().to_string(),
            txn.description().to_string(),
        ]);
    }
    out.info(table.render());
}

pub fn summary(store: &LedgerStore, out: &Output) {
    let summary = store.summary();
    out.section("SUMMARY");
    out.info(format!(
        "Income Total: {} - Income Count: {}",
        out.money(summary.income_total),
        summary.income_count
    ));
    out.info(format!(
        "Expense Total: {} - Expense Count: {}",
        out.money(summary.expense_total),
        summary.expense_count
    ));
    out.info(format!("Current Balance: {}", out.money(summary.balance)));
}

pub fn categories(store: &LedgerStore, out: &Output, income: bool) {
    let kind = if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };
    let shares = Aggregator::category_shares(store.all(), kind);
    out.section(format!("{} by category", title_for(kind)));
    if shares.is_empty() {
        out.info(format!("No {kind} transactions recorded yet."));
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Total"),
        TableColumn::right("Share"),
    ]);
    for share in shares {
        table.push_row(vec![
            share.category,
            out.money(share.total),
            format!("{:.2}%", share.share_percent),
        ]);
    }
    out.info(table.render());
}

pub fn months(store: &LedgerStore, out: &Output) {
    let months = Aggregator::group_by_month(store.all());
    out.section("Monthly totals");
    if months.is_empty() {
        out.info("No transactions recorded yet.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expense"),
        TableColumn::right("Net"),
    ]);
    for (month, totals) in months {
        table.push_row(vec![
            month.to_string(),
            out.money(totals.income_total),
            out.money(totals.expense_total),
            out.money(totals.net()),
        ]);
    }
    out.info(table.render());
}

pub fn import(store: &mut LedgerStore, out: &Output, file: &Path) -> Result<()> {
    let transactions = LegacyExport::from_path(file)?.into_transactions()?;
    if transactions.is_empty() {
        out.warning(format!("{} holds no transactions", file.display()));
        return Ok(());
    }
    let count = transactions.len();
    let ledger = store.append_all(transactions)?;
    out.success(format!(
        "Imported {count} transactions; balance is now {}",
        out.money(ledger.balance())
    ));
    Ok(())
}

pub fn config_show(config: &Config, base: &Path, out: &Output) {
    out.section("Configuration");
    let ledger_file = config.resolve_ledger_file(base);
    let origin = if config.ledger_file.is_some() { "" } else { " (default)" };
    out.info(format!("  ledger_file: {}{origin}", ledger_file.display()));
    out.info(format!("  currency_symbol: {}", config.currency_symbol));
    out.info(format!(
        "  color_enabled: {}",
        if config.color_enabled { "on" } else { "off" }
    ));
}

pub fn config_set(
    manager: &ConfigManager,
    mut config: Config,
    key: &str,
    value: &str,
    out: &Output,
) -> std::result::Result<(), ConfigError> {
    config.set(key, value)?;
    manager.save(&config)?;
    out.success("Configuration updated.");
    Ok(())
}

pub fn version(out: &Output) {
    let meta = build_info::current();
    out.info(format!(
        "ledger_core {} ({} {}, built {})",
        meta.version, meta.git_hash, meta.git_status, meta.timestamp
    ));
    out.info(format!(
        "target {} / {} / {}",
        meta.target, meta.profile, meta.rustc
    ));
}

fn title_for(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expenses",
    }
}
