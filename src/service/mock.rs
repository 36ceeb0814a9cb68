use std::fs::File;

use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a mock request CSV with random purchases. This is used to
/// exercise the box office end to end.
///
/// Rows for one purchase stay contiguous (the orchestrator groups by
/// account runs); line order within a purchase is shuffled. Most
/// purchases are valid; roughly one in seven breaks a rule so the error
/// path gets exercised too.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["account", "type", "count"])?;

    let mut rng = rand::rng();
    let mut rows = 0usize;

    for account in 1..=count as u64 {
        let mut lines: Vec<(&str, i64)> = Vec::new();

        if account % 7 == 0 {
            // Rule breakers: a lap full of infants or a sold-out request
            if account % 14 == 0 {
                lines.push(("ADULT", 21));
            } else {
                lines.push(("INFANT", rng.random_range(1..=3)));
            }
        } else {
            let adults = rng.random_range(1..=4i64);
            lines.push(("ADULT", adults));

            if rng.random_bool(0.6) {
                lines.push(("CHILD", rng.random_range(1..=3)));
            }
            if rng.random_bool(0.4) {
                lines.push(("INFANT", rng.random_range(1..=adults)));
            }
        }

        lines.shuffle(&mut rng);

        for (ticket_type, line_count) in &lines {
            let account_str = account.to_string();
            let count_str = line_count.to_string();

            wtr.write_record([account_str.as_str(), ticket_type, count_str.as_str()])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    println!(
        "✓ Generated {} request lines across {} purchases to {}",
        rows, count, output
    );
    Ok(())
}
