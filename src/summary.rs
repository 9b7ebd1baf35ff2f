//! Terminal summary report
//!
//! The non-interactive rendition of the charts: house counts as a
//! scaled bar table plus the drill-down breakdowns, colored per house.

use colored::{Color, Colorize};

use crate::aggregate::{display_label, group_count, house_detail, Bucket};
use crate::data::Character;

const BAR_WIDTH: usize = 40;

/// Terminal color for a house, steel-blue fallback like the charts
pub fn house_color(house: &str) -> Color {
    match house {
        "Gryffindor" => Color::Red,
        "Slytherin" => Color::Green,
        "Ravenclaw" => Color::Blue,
        "Hufflepuff" => Color::Yellow,
        _ => Color::Cyan,
    }
}

fn scaled_bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

/// Print the house aggregate table and per-house breakdowns
pub fn print_summary(records: &[Character]) {
    let houses = group_count(records, |c| c.house.clone());
    let max = houses.iter().map(|b| b.count).max().unwrap_or(0);

    println!("{}", "Hogwarts Houses".bold());
    println!("{}", "─".repeat(60));

    for bucket in &houses {
        let bar = scaled_bar(bucket.count, max).color(house_color(&bucket.key));
        println!("{:<12} {:>4}  {}", bucket.key, bucket.count, bar);
    }

    println!(
        "\n{} characters across {} houses\n",
        records.len(),
        houses.len()
    );

    for bucket in &houses {
        print_house_breakdown(records, bucket);
    }
}

fn print_house_breakdown(records: &[Character], bucket: &Bucket) {
    let detail = house_detail(records, &bucket.key);

    println!(
        "{}  ({} characters)",
        detail.header.color(house_color(&detail.header)).bold(),
        detail.total
    );

    for section in &detail.sections {
        println!("  {}", section.title.bold());
        for line in section.lines() {
            println!("    {}", line);
        }
    }
    println!();
}

/// One-line bucket rendering used by tests and the quiet path
pub fn bucket_line(bucket: &Bucket) -> String {
    format!("{}: {}", display_label(&bucket.key), bucket.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_color_map() {
        assert_eq!(house_color("Gryffindor"), Color::Red);
        assert_eq!(house_color("Slytherin"), Color::Green);
        assert_eq!(house_color("Ravenclaw"), Color::Blue);
        assert_eq!(house_color("Hufflepuff"), Color::Yellow);
        assert_eq!(house_color("Other"), Color::Cyan);
    }

    #[test]
    fn test_scaled_bar() {
        assert_eq!(scaled_bar(0, 10), "");
        assert_eq!(scaled_bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(scaled_bar(5, 10).chars().count(), BAR_WIDTH / 2);
        // Zero max never divides
        assert_eq!(scaled_bar(0, 0), "");
    }

    #[test]
    fn test_bucket_line_unknown() {
        assert_eq!(bucket_line(&Bucket::new("", 2)), "Unknown: 2");
        assert_eq!(bucket_line(&Bucket::new("Human", 7)), "Human: 7");
    }
}
