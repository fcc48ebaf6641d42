use chrono::NaiveDate;
use clap::ArgMatches;

use tickclock_core::{DateTimeFormatter, DisplayLocale};

/// 2024-01-15 13:05:09, chosen so day, month and 12/24-hour differences show.
fn sample_timestamp() -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|d| d.and_hms_opt(13, 5, 9))
}

pub(crate) fn handle_locales_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let at = sample_timestamp().ok_or("Invalid sample timestamp")?;
    for line in locale_lines(&at) {
        println!("{line}");
    }
    Ok(())
}

fn locale_lines(at: &chrono::NaiveDateTime) -> Vec<String> {
    DisplayLocale::ALL
        .iter()
        .map(|locale| {
            let marker = if *locale == DisplayLocale::default() {
                " (default)"
            } else {
                ""
            };
            format!(
                "{:<6} {}{}",
                locale.tag(),
                DateTimeFormatter::new(*locale).format(at),
                marker
            )
        })
        .collect()
}
