use anyhow::Result;
use env_logger::Env;
use std::env;

use billconv::data;

fn main() -> Result<()> {
    // Usage:
    //   billconv [input.csv] [output.json]
    //
    // Defaults:
    //   bills.csv
    //   bills-import.json
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or("bills.csv");
    let output = args.get(2).map(String::as_str).unwrap_or("bills-import.json");

    let import = data::process_csv(input)?;
    data::export_json(output, &import)?;

    println!(
        "Successfully converted {} bills to {}",
        import.bills().len(),
        output
    );

    Ok(())
}
