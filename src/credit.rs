//! Loan math for the credit simulator and the request flow.

use chrono::Datelike;

/// Monthly interest rate (percent) applied to new requests by default.
pub const DEFAULT_MONTHLY_RATE_PCT: f64 = 1.9;

/// Fixed monthly installment for a loan of `principal` over `months` at
/// `monthly_rate_pct` percent per month (standard annuity).
///
/// A zero rate degenerates to straight division; zero months yields zero
/// rather than dividing by it.
pub fn monthly_installment(principal: f64, monthly_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = months as f64;
    let rate = monthly_rate_pct / 100.0;
    if rate == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + rate).powf(n);
    principal * rate * growth / (growth - 1.0)
}

/// Reference number for a loan request: `PRE`, the year, and a 5-digit
/// per-year sequence — `PRE202400007`.
pub fn loan_reference(year: i32, sequence: u32) -> String {
    format!("PRE{year}{sequence:05}")
}

/// Reference for a request registered right now.
pub fn next_loan_reference(sequence: u32) -> String {
    loan_reference(chrono::Local::now().year(), sequence)
}
