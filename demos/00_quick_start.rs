/// quick start - minimal example to get started
use financial_projection_rs::{
    project_loan, GracePeriod, LoanProjectionInput, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a 100,000 education loan at 8%: 4 years of study, 6 months grace,
    // repaid over 10 years
    let input = LoanProjectionInput::new(
        Money::from_major(100_000),
        Rate::from_percentage(8),
        dec!(48),
        GracePeriod::SixMonths,
        120,
    );

    let projection = project_loan(&input)?;

    println!("monthly installment: {}", projection.monthly_installment.round_dp(2));
    println!("total payable:       {}", projection.total_payable.round_dp(2));
    println!("total interest:      {}", projection.total_interest.round_dp(2));

    Ok(())
}
