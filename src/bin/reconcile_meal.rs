//! Utility to reconcile a saved meal analysis payload
//! Usage: cargo run --bin reconcile_meal -- [path/to/analysis.json] [--envelope]
//!
//! Reads from stdin when no path is given. Prints the reconciliation as JSON
//! and lists validation issues on stderr.

use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let envelope = args.iter().any(|a| a == "--envelope");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let payload = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = spork::Config::from_env()?;
    let response = spork::tools::meals::reconcile_meal_json(&config, &payload, envelope)?;

    let reconciliation = &response.reconciliation;
    let corrected = &reconciliation.corrected_meal;
    eprintln!("Ingredients: {}", corrected.ingredients.len());
    eprintln!(
        "Totals: {} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
        corrected.total_calories, corrected.protein_grams, corrected.carb_grams, corrected.fat_grams
    );
    for error in &reconciliation.errors {
        eprintln!("  ! {}", error);
    }

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
