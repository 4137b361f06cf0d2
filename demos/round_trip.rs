//! Persisting money through its integer representation.
//!
//! Shows the JSON a storage layer would keep and that reading it back
//! reproduces the original value exactly.

use exact_money::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let amounts = [0.0, 19.99, 1.15555555, -1234.5];

    println!("{:<14} {:<50} {}", "amount", "stored", "restored");
    for amount in amounts {
        let money = Money::with_code(amount, "USD")?;
        let json = serde_json::to_string(&money.to_parts())?;
        let restored = Money::try_from(serde_json::from_str::<MoneyParts>(&json)?)?;

        assert_eq!(restored, money);
        println!("{:<14} {:<50} {}", money.to_string(), json, restored);
    }

    Ok(())
}
