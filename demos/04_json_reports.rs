/// json reports - presentation-rounded views for rendering layers
use financial_projection_rs::{
    project_investment, project_loan, CompoundingFrequency, GracePeriod,
    InvestmentProjectionInput, InvestmentReport, InvestmentTerm, LoanProjectionInput, LoanReport,
    Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loan_input = LoanProjectionInput::new(
        Money::from_major(100_000),
        Rate::from_percentage(8),
        dec!(48),
        GracePeriod::SixMonths,
        120,
    );
    let loan = project_loan(&loan_input)?;
    println!("{}", LoanReport::new(&loan_input, &loan).to_json_pretty()?);

    let investment_input = InvestmentProjectionInput::new(
        Money::from_major(10_000),
        Money::from_major(500),
        Rate::from_percentage(8),
        InvestmentTerm::Years(10),
        CompoundingFrequency::Monthly,
    )
    .with_inflation(Rate::from_percentage(3));
    let investment = project_investment(&investment_input)?;
    println!(
        "{}",
        InvestmentReport::new(&investment_input, &investment).to_json_pretty()?
    );

    Ok(())
}
