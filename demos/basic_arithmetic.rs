//! Exact arithmetic versus native floats.
//!
//! Run with `RUST_LOG=trace` to see conversion tracing.

use exact_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    env_logger::init();

    println!("╔══════════════════════════════════════════╗");
    println!("║  exact-money: Basic Arithmetic Example   ║");
    println!("╚══════════════════════════════════════════╝\n");

    // --- Scenario 1: the classic drift ---
    println!("━━━ Scenario 1: 0.1 + 0.2 ━━━\n");

    let usd = Currency::new("USD")?;
    let a = Money::new(0.1, usd.clone())?;
    let b = Money::new(0.2, usd.clone())?;

    println!("f64:    {}", 0.1_f64 + 0.2_f64);
    println!("Money:  {}", a.add(&b)?);
    println!();

    // --- Scenario 2: a small invoice ---
    println!("━━━ Scenario 2: Invoice ━━━\n");

    let subtotal = Money::new(32.32, usd.clone())?;
    let tip = subtotal.percentage(10.0)?;
    let total = subtotal.add(&tip)?;

    println!("Subtotal:           {}", subtotal);
    println!("Tip (10%):          {}", tip);
    println!("Total:              {}", total);
    println!("Split three ways:   {}", total.divide(&Money::new(3.0, usd.clone())?)?);
    println!();

    // --- Scenario 3: conversion and the currency guard ---
    println!("━━━ Scenario 3: Currencies ━━━\n");

    let eur = Currency::new("EUR")?;
    let in_euros = total.convert(0.88, eur.clone())?;
    println!("Converted at 0.88:  {}", in_euros);

    match total.add(&in_euros) {
        Ok(sum) => println!("Unexpected sum:     {}", sum),
        Err(e) => println!("Refused:            {}", e),
    }
    match in_euros.convert(1.0, eur) {
        Ok(same) => println!("Unexpected:         {}", same),
        Err(e) => println!("Refused:            {}", e),
    }

    Ok(())
}
