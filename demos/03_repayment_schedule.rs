/// repayment schedule - month-by-month amortization table
use financial_projection_rs::chrono::NaiveDate;
use financial_projection_rs::{
    repayment_schedule, GracePeriod, LoanProjectionInput, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanProjectionInput::new(
        Money::from_major(60_000),
        Rate::from_percentage(9),
        dec!(24),
        GracePeriod::SixMonths,
        36,
    );

    let first_payment = NaiveDate::from_ymd_opt(2027, 1, 1).ok_or("bad date")?;
    let schedule = repayment_schedule(&input, first_payment)?;

    println!(
        "{} over {} months from {}",
        schedule.principal.round_dp(2),
        schedule.term_months,
        schedule.first_payment_date
    );
    println!("{:>3} {:>12} {:>12} {:>12} {:>12} {:>12}", "#", "date", "payment", "principal", "interest", "balance");

    for payment in &schedule.payments {
        println!(
            "{:>3} {:>12} {:>12} {:>12} {:>12} {:>12}",
            payment.payment_number,
            payment.payment_date.to_string(),
            payment.payment_amount.round_dp(2).to_string(),
            payment.principal_portion.round_dp(2).to_string(),
            payment.interest_portion.round_dp(2).to_string(),
            payment.ending_balance.round_dp(2).to_string(),
        );
    }

    println!(
        "\ntotals: {} paid, {} interest",
        schedule.total_payment.round_dp(2),
        schedule.total_interest.round_dp(2)
    );

    Ok(())
}
