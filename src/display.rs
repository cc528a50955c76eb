use lotto::app::WinningNumbersState;
use lotto::core::{Draw, FrequencyEntry, PositionalRanking};
use lotto::LottoError;

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:>2}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_draw(draw: &Draw, json: bool) -> Result<(), LottoError> {
    if json {
        println!("{}", serde_json::to_string(draw)?);
    } else {
        println!("🎱 {}", format_numbers(draw.numbers()));
    }
    Ok(())
}

pub fn print_drawings(state: &WinningNumbersState, json: bool) -> Result<(), LottoError> {
    if json {
        println!("{}", serde_json::to_string_pretty(state.items())?);
        return Ok(());
    }

    for record in state.items() {
        println!(
            "{:>5}  {:04}-{:02}-{:02}  {} + {:>2}  ({} winners, {} each)",
            record.round,
            record.year(),
            record.month(),
            record.day(),
            format_numbers(record.draw.numbers()),
            record.bonus,
            record.first_winners,
            record.first_win_prize
        );
    }

    println!(
        "\nPage {} / {}",
        state.current_page(),
        state.total_pages().unwrap_or(0)
    );
    Ok(())
}

pub fn print_statistics(
    top: &[FrequencyEntry],
    positional: &PositionalRanking,
    json: bool,
) -> Result<(), LottoError> {
    if json {
        let body = serde_json::json!({ "frequent": top, "positional": positional.groups() });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Most frequent numbers");
    if top.is_empty() {
        println!("  (unavailable)");
    }
    for entry in top {
        println!("  {:>2}  {} times", entry.number, entry.frequency);
    }

    println!("\nMost frequent by position");
    for (position, numbers) in positional.iter() {
        println!("  #{}  {}", position, format_numbers(numbers));
    }
    Ok(())
}
