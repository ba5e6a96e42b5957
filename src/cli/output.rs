use colored::Colorize;
use rust_decimal::Decimal;
use std::fmt;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Writes styled lines to stdout (errors to stderr). Built once per
/// invocation from the loaded [`Config`] and passed to every handler.
#[derive(Clone, Debug)]
pub struct Output {
    color: bool,
    currency_symbol: String,
}

impl Output {
    pub fn new(color: bool, currency_symbol: impl Into<String>) -> Self {
        Self {
            color,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config(config: &Config, no_color: bool) -> Self {
        Self::new(config.color_enabled && !no_color, config.currency_symbol.clone())
    }

    /// Two-decimal amount with the configured symbol, sign in front.
    pub fn money(&self, amount: Decimal) -> String {
        if amount.is_sign_negative() && !amount.is_zero() {
            format!("-{}{:.2}", self.currency_symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.currency_symbol, amount.abs())
        }
    }

    pub fn styled(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = match kind {
            MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
            MessageKind::Info => message.to_string(),
            MessageKind::Success => format!("OK: {message}"),
            MessageKind::Warning => format!("WARNING: {message}"),
            MessageKind::Error => format!("ERROR: {message}"),
        };
        if !self.color {
            return text;
        }
        match kind {
            MessageKind::Success => text.bright_green().to_string(),
            MessageKind::Warning => text.bright_yellow().to_string(),
            MessageKind::Error => text.bright_red().to_string(),
            MessageKind::Section => text.bold().to_string(),
            MessageKind::Info => text,
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        println!("{}", self.styled(MessageKind::Info, message));
    }

    pub fn success(&self, message: impl fmt::Display) {
        println!("{}", self.styled(MessageKind::Success, message));
    }

    pub fn warning(&self, message: impl fmt::Display) {
        println!("{}", self.styled(MessageKind::Warning, message));
    }

    pub fn error(&self, message: impl fmt::Display) {
        eprintln!("{}", self.styled(MessageKind::Error, message));
    }

    pub fn section(&self, title: impl fmt::Display) {
        println!("{}", self.styled(MessageKind::Section, title));
    }
}
