//! Plain-text rendering of a [`Report`].

use std::fmt;

use crate::analysis::{Count, Report, weekday_name};

/// Terminal-friendly view of a [`Report`].
///
/// Empty tables are rendered as a one-line note instead of a header with
/// nothing under it.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a Report);

/// Renders a report as a terminal-friendly summary.
pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &Report) -> fmt::Result {
    let s = &report.summary;

    writeln!(out, "📊 Chat statistics for {}", report.filter)?;
    writeln!(out)?;
    writeln!(out, "   Messages:   {}", s.total_messages)?;
    writeln!(out, "   Words:      {}", s.total_words)?;
    writeln!(out, "   Characters: {}", s.total_characters)?;
    writeln!(out, "   Media:      {}", s.total_media)?;
    writeln!(out, "   Links:      {}", s.total_links)?;
    if let Some(sender) = &s.most_active_sender {
        writeln!(out, "   Most active: {sender}")?;
    }

    if let Some(rankings) = &report.rankings {
        section(out, "👥 Most messages", &rankings.most_messages, |k| k.clone())?;
        section(out, "✍️  Most characters", &rankings.most_characters, |k| k.clone())?;
        section(out, "🖼️  Most media", &rankings.most_media, |k| k.clone())?;

        if !rankings.message_share.is_empty() {
            writeln!(out)?;
            writeln!(out, "🥧 Message share")?;
            for share in &rankings.message_share {
                writeln!(out, "   {:<24} {:>5.1}%", share.sender, share.percent)?;
            }
        }
    }

    section(out, "📅 Busiest days", &report.busiest_days, |d| {
        d.format("%Y-%m-%d").to_string()
    })?;
    section(out, "🗓️  Messages per month", report.timeline.by_month.entries(), |m| {
        m.to_string()
    })?;
    section(out, "📆 Messages per weekday", report.timeline.by_weekday.entries(), |d| {
        weekday_name(*d).to_string()
    })?;
    section(
        out,
        "🕐 Busiest hours",
        &report.timeline.by_hour.top(5),
        |h| format!("{h:02}:00"),
    )?;
    section(out, "💬 Top words", &report.top_words, |k| k.clone())?;
    section(out, "😀 Top emoji", &report.top_emojis, |k| k.clone())?;

    if !report.warnings.is_empty() {
        writeln!(out)?;
        for warning in &report.warnings {
            writeln!(out, "ℹ️  {warning}")?;
        }
    }

    Ok(())
}

fn section<K, F>(
    out: &mut fmt::Formatter<'_>,
    title: &str,
    rows: &[Count<K>],
    label: F,
) -> fmt::Result
where
    F: Fn(&K) -> String,
{
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{title}")?;
    for row in rows {
        writeln!(out, "   {:<24} {:>6}", label(&row.key), row.count)?;
    }
    Ok(())
}
