use novapanel::credit::{
    DEFAULT_MONTHLY_RATE_PCT, loan_reference, monthly_installment, next_loan_reference,
};

#[test]
fn zero_rate_degenerates_to_straight_division() {
    assert_eq!(monthly_installment(1_200_000.0, 0.0, 12), 100_000.0);
}

#[test]
fn zero_term_charges_nothing() {
    assert_eq!(monthly_installment(1_200_000.0, 1.9, 0), 0.0);
}

#[test]
fn installments_amortize_the_loan_exactly() {
    let principal = 1_200_000.0;
    let months = 12;
    let pay = monthly_installment(principal, DEFAULT_MONTHLY_RATE_PCT, months);

    // paying the installment every month must drive the balance to zero
    let rate = DEFAULT_MONTHLY_RATE_PCT / 100.0;
    let mut balance = principal;
    for _ in 0..months {
        balance = balance * (1.0 + rate) - pay;
    }
    assert!(balance.abs() < 1e-6 * principal, "residual {balance}");
}

#[test]
fn interest_makes_the_installment_larger_than_straight_division() {
    let principal = 5_000_000.0;
    let months = 24;
    let pay = monthly_installment(principal, 1.9, months);
    assert!(pay > principal / months as f64);
    assert!(pay * months as f64 > principal);
}

#[test]
fn references_carry_year_and_padded_sequence() {
    assert_eq!(loan_reference(2024, 7), "PRE202400007");
    assert_eq!(loan_reference(2022, 12345), "PRE202212345");
}

#[test]
fn next_reference_uses_the_current_year() {
    use chrono::Datelike;
    let got = next_loan_reference(1);
    assert_eq!(got, loan_reference(chrono::Local::now().year(), 1));
}
