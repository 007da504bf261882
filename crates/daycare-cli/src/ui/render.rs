//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::{OutputMode, UiContext};
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Daycare · command (context)"
/// Plain mode: "daycare command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Daycare", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("daycare {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render the line shown when a filter leaves nothing to list.
pub fn empty_state(ctx: &UiContext, noun: &str) -> String {
    if ctx.mode.is_pretty() {
        format!(
            "{}\n{}",
            badge(ctx, Badge::Info, &format!("No {} found", noun)),
            hint(ctx, "Try adjusting your search or filter.")
        )
    } else {
        format!("No {} found", noun)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a borderless table for record lists.
///
/// Pretty mode: aligned columns with a dim header row
/// Plain mode: tab-separated values (no header)
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
