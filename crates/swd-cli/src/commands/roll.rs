use colored::{ColoredString, Colorize};
use comfy_table::{ContentArrangement, Table};

use swd_dice::{RollConfig, RollResult, Roller, Symbol, Tally, parse_dice_pool};

pub fn run(input: &str, seed: Option<u64>, max_dice: u32, json: bool) -> Result<(), String> {
    let mut config = RollConfig::default().with_max_dice(max_dice);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let pool = parse_dice_pool(input);
    let result = Roller::new(&config)
        .try_roll(&pool)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if pool.is_empty() {
        println!("  {}", "No dice recognised in input.".dimmed());
    } else {
        println!(
            "  {} {}",
            "Rolling".bold(),
            format!("{pool} ({} dice)", pool.total_dice()).dimmed()
        );
    }
    println!();

    print_rolls(&result);
    print_totals(&result.tally);

    Ok(())
}

fn print_rolls(result: &RollResult) {
    println!("  {}", "Individual Rolls".bold().underline());
    println!();

    if result.is_empty() {
        println!("  {}", "(nothing rolled)".dimmed());
        println!();
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Die", "Face"]);
    for (i, entry) in result.log.iter().enumerate() {
        let face = if entry.is_blank() {
            "blank".to_string()
        } else {
            entry.face.clone()
        };
        table.add_row(vec![(i + 1).to_string(), entry.kind.to_string(), face]);
    }
    println!("{table}");
    println!();
}

fn print_totals(tally: &Tally) {
    println!("  {}", "Final Results".bold().underline());
    println!();
    for (symbol, count) in tally.iter() {
        let line = format!("{symbol}: {count}");
        if count == 0 {
            println!("  {}", line.dimmed());
        } else {
            println!("  {}", colorize_symbol(symbol, &line));
        }
    }
    println!();

    let net_success = tally.net_success();
    let net_advantage = tally.net_advantage();
    let verdict = if tally.is_success() {
        "PASS".green().bold()
    } else {
        "FAIL".red().bold()
    };
    let side = match net_advantage {
        n if n > 0 => format!("{n} advantage"),
        n if n < 0 => format!("{} threat", -n),
        _ => "no advantage or threat".to_string(),
    };
    println!("  {verdict}  net {net_success} success, {side}");
}

fn colorize_symbol(symbol: Symbol, text: &str) -> ColoredString {
    match symbol {
        Symbol::Success | Symbol::Advantage => text.green(),
        Symbol::Triumph => text.yellow().bold(),
        Symbol::Failure | Symbol::Threat => text.red(),
        Symbol::Despair => text.red().bold(),
        Symbol::Light => text.white().bold(),
        Symbol::Dark => text.purple(),
    }
}
