// ============================================================================
// Precision Demo
// ============================================================================

use decimal_summary::numeric::MinorUnits;
use decimal_summary::precision::{compare, decimal_from_float_literal};
use decimal_summary::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Float vs Decimal ===\n");

    let sum = compare(&["1.1", "2.2"], &[])?;
    println!("1.1 + 2.2");
    println!("  {}", sum);
    println!("  equals 3.3 as f64? {}", sum.float_matches("3.3")?);
    println!("  equals 3.3 as decimal? {}", sum.decimal_matches("3.3")?);

    let residual = compare(&["0.1", "0.1", "0.1"], &["0.3"])?;
    println!("\n0.1 + 0.1 + 0.1 - 0.3");
    println!("  {}", residual);
    println!("  f64 residual: {:e}", residual.float_residual());

    if let Some(literal) = decimal_from_float_literal(0.1) {
        println!("\nDecimal built from the f64 literal 0.1: {}", literal);
    }

    println!("\n=== Integer Minor Units ===\n");

    let a = MinorUnits::remove_separator("1.23")?;
    let b = MinorUnits::remove_separator("2.01")?;
    println!("1.23 -> {} ({} places)", a.units(), a.places());
    println!("2.01 -> {} ({} places)", b.units(), b.places());
    let total = a.checked_add(b)?;
    println!("sum -> {} -> {}", total.units(), total.to_decimal());

    let c = MinorUnits::remove_separator("0.125")?;
    println!("0.125 -> {} ({} places)", c.units(), c.places());
    match total.checked_add(c) {
        Ok(sum) => println!("unexpected sum: {}", sum.to_decimal()),
        Err(err) => println!("adding 0.125 to cents: {}", err),
    }

    println!("\n=== Weekly Sales Summary ===\n");

    let loader = TableLoader::new(SummaryConfig::sales())?;
    let table: Table = loader.load_reader("week,sales\n0,1.1\n1,2.2\n".as_bytes())?;
    let summary = DecimalAggregator::default().summarize(&table)?;

    println!("total sales: {}", summary.total);
    println!("average sales: {}", summary.average);
    println!("week with highest sales: {}", summary.top_period);

    let cents: Table<Cents> = loader.load_reader("week,sales\n0,1.10\n1,2.20\n2,0.05\n".as_bytes())?;
    let summary = DecimalAggregator::default().summarize(&cents)?;
    println!("\nIn cents: {}", summary);

    Ok(())
}
