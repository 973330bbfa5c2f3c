//! Plain-text rendering of entries, charts and summaries.
//!
//! Everything here returns a `String` so the command layer decides where it
//! goes. Percentages are derived from counts at render time.

use super::ChartStyle;
use crate::constants::CHART_BAR_WIDTH;
use crate::exercises::{format_clock, BreathingUpdate, MeditationUpdate, BreathingPhase};
use crate::journal_core::{GratitudeEntry, MoodEntry, SleepEntry};
use crate::ops::{ExportReport, Summary};
use chrono::{DateTime, Local, Utc};
use std::collections::BTreeMap;
use std::fmt::Write;

const EMPTY: &str = "No entries yet";

fn local_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn label_width(counts: &BTreeMap<String, usize>) -> usize {
    counts.keys().map(|k| k.chars().count()).max().unwrap_or(0)
}

pub fn render_chart(counts: &BTreeMap<String, usize>, style: ChartStyle) -> String {
    match style {
        ChartStyle::Bar => render_bar_chart(counts, CHART_BAR_WIDTH),
        ChartStyle::Pie => render_pie_chart(counts),
    }
}

/// Horizontal bars scaled so the largest count fills `width` columns.
/// Any non-zero count gets at least one column.
pub fn render_bar_chart(counts: &BTreeMap<String, usize>, width: usize) -> String {
    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return EMPTY.to_string();
    }

    let pad = label_width(counts);
    let mut out = String::new();
    for (label, &count) in counts {
        let columns = ((count * width) as f64 / max as f64).round() as usize;
        let columns = if count > 0 { columns.max(1) } else { 0 };
        let _ = writeln!(out, "{:<pad$} | {} {}", label, "#".repeat(columns), count);
    }
    out.trim_end().to_string()
}

/// Share of each value as a percentage of the total.
pub fn render_pie_chart(counts: &BTreeMap<String, usize>) -> String {
    let total: usize = counts.values().sum();
    if total == 0 {
        return EMPTY.to_string();
    }

    let pad = label_width(counts);
    let mut out = String::new();
    for (label, &count) in counts {
        let share = count as f64 * 100.0 / total as f64;
        let _ = writeln!(out, "{:<pad$} {:>5.1}% ({})", label, share, count);
    }
    out.trim_end().to_string()
}

/// Keeps the most recent `limit` entries, still oldest first.
pub fn most_recent<T>(entries: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) => &entries[entries.len().saturating_sub(n)..],
        None => entries,
    }
}

pub fn render_moods(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return EMPTY.to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "#{} {} {} ({}/10, {}): {}",
            entry.id,
            local_time(&entry.recorded_at),
            entry.mood,
            entry.intensity,
            entry.sentiment,
            entry.note
        );
    }
    out.trim_end().to_string()
}

pub fn render_gratitudes(entries: &[GratitudeEntry]) -> String {
    if entries.is_empty() {
        return EMPTY.to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "#{} {} {}", entry.id, local_time(&entry.recorded_at), entry.text);
    }
    out.trim_end().to_string()
}

pub fn render_sleep(entries: &[SleepEntry]) -> String {
    if entries.is_empty() {
        return EMPTY.to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "#{} {} {}h ({})",
            entry.id,
            local_time(&entry.recorded_at),
            entry.hours,
            entry.quality
        );
    }
    out.trim_end().to_string()
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let day_word = if summary.streak == 1 { "day" } else { "days" };
    let _ = writeln!(out, "Streak: {} {}", summary.streak, day_word);
    let _ = writeln!(
        out,
        "Entries: {} moods, {} gratitude, {} sleep",
        summary.total_moods, summary.total_gratitudes, summary.total_sleep
    );

    match summary.average_sleep_hours {
        Some(avg) => {
            let _ = writeln!(out, "Average sleep: {:.1}h", avg);
        }
        None => {
            let _ = writeln!(out, "Average sleep: -");
        }
    }

    let _ = writeln!(out, "Recent intensity:");
    if summary.recent_intensity.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY);
    }
    for (day, intensity) in &summary.recent_intensity {
        let _ = writeln!(out, "  {} {:<10} {}", day, "#".repeat(*intensity as usize), intensity);
    }

    let _ = writeln!(out, "Sleep trend:");
    if summary.sleep_trend.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY);
    }
    for (day, hours) in &summary.sleep_trend {
        let _ = writeln!(out, "  {} {}h", day, hours);
    }
    out.trim_end().to_string()
}

pub fn render_export_report(report: &ExportReport) -> String {
    format!(
        "Exported {} entries ({} moods, {} gratitude, {} sleep) to {}",
        report.total(),
        report.moods,
        report.gratitudes,
        report.sleep,
        report.path.display()
    )
}

pub fn render_breathing(update: &BreathingUpdate, cycles: u32) -> String {
    match update.phase {
        BreathingPhase::Done | BreathingPhase::Idle => update.phase.to_string(),
        _ => format!("[{}/{}] {}", update.cycle, cycles, update.phase),
    }
}

pub fn render_meditation(update: &MeditationUpdate) -> String {
    match update {
        MeditationUpdate::Remaining(left) => format_clock(*left),
        MeditationUpdate::Finished => "Meditation session complete! How do you feel?".to_string(),
    }
}
