use owo_colors::{OwoColorize, Stream, Style};
use pw_core::classify::{DisplayCategory, IconKind, Tone, classify_status};
use pw_core::query::StatusSummary;
use pw_events::types::{ActivityRecord, Status};
use std::io::{self, Write};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SUMMARY_LABEL_WIDTH: usize = 12;
pub const EMPTY_MESSAGE: &str = "No activities match your filters";

fn glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::CheckCircle => "✔",
        IconKind::XCircle => "✘",
        IconKind::AlertCircle => "!",
        IconKind::Clock => "◷",
    }
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Green => Style::new().green(),
        Tone::Red => Style::new().red(),
        Tone::Amber => Style::new().yellow(),
        Tone::Blue => Style::new().blue(),
        Tone::Neutral => Style::new().dimmed(),
    }
}

/// Styles `text` only when stdout supports colour (honours `NO_COLOR`).
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

pub fn category_line(category: DisplayCategory) -> String {
    category_cell(category, 0)
}

/// Glyph and label occupying at least `width` visible columns. Padding is
/// applied before styling so escape codes never count toward the width.
fn category_cell(category: DisplayCategory, width: usize) -> String {
    let style = tone_style(category.tone);
    let label_width = width.saturating_sub(glyph(category.icon).chars().count() + 1);
    let label = format!("{:<label_width$}", category.label);
    format!(
        "{} {}",
        paint(glyph(category.icon), style),
        paint(&label, style)
    )
}

pub fn write_records<W: Write>(out: &mut W, records: &[ActivityRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{EMPTY_MESSAGE}");
    }
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_record(out, record)?;
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &ActivityRecord) -> io::Result<()> {
    let category = classify_status(record.status);
    writeln!(
        out,
        "{}  {}  [{}]  {}",
        category_line(category),
        paint(&record.headline(), Style::new().bold()),
        record.id,
        paint(
            &record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            Style::new().dimmed()
        ),
    )?;
    writeln!(out, "    {}", record.description)?;
    if let Some(subject) = &record.subject {
        writeln!(
            out,
            "    ({}) Employee: {} ({})",
            subject.initials(),
            subject.name,
            subject.id
        )?;
    }
    Ok(())
}

pub fn write_agents<W: Write>(out: &mut W, agents: &[String]) -> io::Result<()> {
    for agent in agents {
        writeln!(out, "{agent}")?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &StatusSummary) -> io::Result<()> {
    for status in Status::ALL {
        writeln!(
            out,
            "{} {:>4}",
            category_cell(classify_status(status), SUMMARY_LABEL_WIDTH),
            summary.count(status)
        )?;
    }
    writeln!(
        out,
        "{:<SUMMARY_LABEL_WIDTH$} {:>4}",
        "Total",
        summary.total()
    )
}
