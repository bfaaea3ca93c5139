//! Basic usage example for formkit-validator

use formkit_validator::prelude::*;

fn main() -> Result<(), RuleError> {
    let username = ValidatorChain::new()
        .required(Some("enter a username"))
        .length(5, 20, None);

    let phone = ValidatorChain::new().pattern(r"^1[3-9]\d{9}$", Some("not a mobile number"))?;

    for input in ["", "abc", "alice_01"] {
        match username.check(input) {
            Ok(()) => println!("✓ {input:?} is a valid username"),
            Err(e) => println!("✗ {input:?}: {e}"),
        }
    }

    for input in ["13812345678", "12812345678"] {
        match phone.check(input) {
            Ok(()) => println!("✓ {input:?} is a valid phone"),
            Err(e) => println!("✗ {input:?}: {e}"),
        }
    }

    println!("\nrules for the frontend:");
    println!("{}", serde_json::to_string_pretty(&username).unwrap_or_default());

    Ok(())
}
