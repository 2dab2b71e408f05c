/// investment growth - lump sum plus monthly contributions, with inflation
use financial_projection_rs::{
    growth_schedule, project_investment, CompoundingFrequency, InvestmentProjectionInput,
    InvestmentTerm, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = InvestmentProjectionInput::new(
        Money::from_major(10_000),
        Money::from_major(500),
        Rate::from_percentage(8),
        InvestmentTerm::Years(10),
        CompoundingFrequency::Monthly,
    )
    .with_inflation(Rate::from_percentage(3));

    let projection = project_investment(&input)?;

    println!("final value:       {}", projection.final_value.round_dp(2));
    println!("total contributed: {}", projection.total_contributed.round_dp(2));
    println!("total return:      {}", projection.total_return.round_dp(2));
    println!(
        "absolute return:   {}%",
        projection.absolute_return.as_percentage().round_dp(2)
    );
    println!(
        "annualized return: {}%",
        projection.annualized_return.as_percentage().round_dp(2)
    );
    println!(
        "effective rate:    {}%",
        projection.effective_annual_rate.as_percentage().round_dp(2)
    );
    if let Some(real) = projection.real_value {
        println!("real value (inflation-adjusted): {}", real.round_dp(2));
    }

    println!("\nyear-by-year growth:");
    for balance in growth_schedule(&input)? {
        println!(
            "  year {:>2}: contributed {:>10}, value {:>10}",
            balance.year,
            balance.contributed_to_date.round_dp(2).to_string(),
            balance.value.round_dp(2).to_string(),
        );
    }

    Ok(())
}
