//! Synthetic WhatsApp export generator for stress testing chatstat.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [12h|24h] [start]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 big_chat.txt 12h 2023-01-01

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;
use rand::seq::SliceRandom;

use chatstat::{ChatstatError, Result};

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Иван",
    "村上",
    "محمد",
    "+44 7700 900123",
    "🔥Fire🔥",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🤔", "🙄", "🔥", "👍", "👍🏽", "❤️", "❤", "🎉", "🇫🇷", "🏳️‍🌈",
    "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const WORDS: &[&str] = &[
    "pizza", "tonight", "meeting", "coffee", "weekend", "train", "late", "movie", "dinner",
    "holiday", "photo", "call", "tomorrow", "beach", "birthday", "the", "and", "is", "you",
];

const NOTIFICATIONS: &[&str] = &[
    "Alice added Bob",
    "Carol left",
    "Bob changed the subject from \"Old\" to \"New\"",
    "Alice changed this group's icon",
    "You were added",
];

enum Clock {
    TwelveHour,
    TwentyFourHour,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("synthetic_chat.txt", String::as_str);
    let clock = match args.get(3).map_or("12h", String::as_str) {
        "24h" => Clock::TwentyFourHour,
        _ => Clock::TwelveHour,
    };
    let start = match args.get(4) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ChatstatError::invalid_date(s.as_str()))?,
        None => NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
    };

    println!("🧪 Export generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Start:    {start}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let started = std::time::Instant::now();
    let mut bytes_written = 0usize;

    let mut now = start.and_hms_opt(8, 0, 0).unwrap_or_default();
    for i in 0..count {
        // Timestamps only move forward
        now += Duration::minutes(rng.gen_range(0..=180));

        let header = format_stamp(now, &clock);
        let line = if i % 50 == 0 {
            format!("{header} - {}\n", NOTIFICATIONS.choose(&mut rng).unwrap_or(&""))
        } else {
            let sender = SENDERS.choose(&mut rng).unwrap_or(&"Alice");
            format!("{header} - {sender}: {}\n", generate_body(&mut rng, i))
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10_000 == 0 {
            eprint!("\r   Generated {}/{count}", i + 1);
        }
    }
    writer.flush()?;

    #[allow(clippy::cast_precision_loss)]
    let mb = bytes_written as f64 / 1_000_000.0;
    println!("\n\n✅ Done!");
    println!("   Size: {mb:.2} MB");
    println!("   Time: {:.2}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn format_stamp(ts: NaiveDateTime, clock: &Clock) -> String {
    let date = ts.format("%d/%m/%y");
    match clock {
        Clock::TwentyFourHour => format!("{date}, {}", ts.format("%H:%M")),
        Clock::TwelveHour => {
            let (pm, hour) = ts.hour12();
            let suffix = if pm { "pm" } else { "am" };
            format!("{date}, {hour}:{:02}\u{202F}{suffix}", ts.minute())
        }
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 20 {
        0..=7 => sentence(rng, 3..12),
        8 => format!("{}\n{}\n{}", sentence(rng, 2..6), sentence(rng, 2..6), sentence(rng, 1..4)),
        9 | 10 => {
            let emojis: Vec<&str> = (0..rng.gen_range(1..6))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {}", sentence(rng, 1..5), emojis.join(""))
        }
        11 => EMOJIS.choose(rng).copied().unwrap_or("😂").to_string(),
        12 => format!("look https://example.com/item/{index} {}", sentence(rng, 1..4)),
        13 | 14 => "<Media omitted>".to_string(),
        15 => "This message was deleted".to_string(),
        16 => format!("Ratio: 3:1 {}", sentence(rng, 1..3)),
        17 => format!("Кириллица: Привет мир {}", sentence(rng, 1..3)),
        18 => "\u{200E}".to_string() + &sentence(rng, 2..5),
        _ => sentence(rng, 1..20),
    }
}

fn sentence(rng: &mut impl Rng, len: std::ops::Range<usize>) -> String {
    let n = rng.gen_range(len);
    (0..n)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
