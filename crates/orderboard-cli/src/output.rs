// Rust guideline compliant 2026-10-18

//! Output formatting module for the Orderboard CLI.
//!
//! This module formats orders, the grouped board and replayed event outputs
//! in various output formats (JSON, table, plain text).

use crate::terminal::{column_color, paint};
use orderboard_app::{AppError, BoardOutput, BoardView, ErrorEnvelope, SuccessEnvelope};
use orderboard_core::{Order, OutputFormat};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for formatting board data in different output formats.
pub trait OutputFormatter {
    /// Formats an order produced by a command.
    ///
    /// # Arguments
    /// * `action` - Name of the command that produced the order
    /// * `order` - The order to format
    fn format_order(&self, action: &'static str, order: &Order) -> String;

    /// Formats the acknowledgement of a deleted order.
    fn format_deleted(&self, order_id: &str) -> String;

    /// Formats the whole board, one section per column.
    fn format_board(&self, view: &BoardView) -> String;

    /// Formats the outputs of replayed events, in event order.
    fn format_outputs(&self, outputs: &[BoardOutput]) -> String;

    /// Formats a free-form status message.
    fn format_message(&self, action: &'static str, message: &str) -> String;

    /// Formats an error for display.
    ///
    /// Application errors carry a stable code; anything else is reported
    /// with its message only.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps results in success envelopes and errors in error envelopes.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(action: &'static str, result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(action, result))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_order(&self, action: &'static str, order: &Order) -> String {
        Self::envelope(action, order)
    }

    fn format_deleted(&self, order_id: &str) -> String {
        Self::envelope("delete", json!({ "order_id": order_id }))
    }

    fn format_board(&self, view: &BoardView) -> String {
        Self::envelope(
            "board",
            json!({
                "columns": view.columns,
                "total": view.total(),
            }),
        )
    }

    fn format_outputs(&self, outputs: &[BoardOutput]) -> String {
        Self::envelope("replay", outputs)
    }

    fn format_message(&self, action: &'static str, message: &str) -> String {
        Self::envelope(action, json!({ "message": message }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let value = match error.downcast_ref::<AppError>() {
            Some(app_error) => serde_json::to_value(ErrorEnvelope::from_error(app_error))
                .unwrap_or_else(|_| json!({ "message": error.to_string() })),
            None => json!({ "message": error.to_string() }),
        };
        json!({ "status": "error", "error": value }).to_string()
    }
}

/// Table output formatter.
///
/// Formats the board as human-readable tables with colored column headers.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str, color: Color) -> String {
        if self.use_color {
            paint(text, color, true)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_order(&self, action: &'static str, order: &Order) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", self.heading("✓", Color::Green), action));
        output.push_str(&format!("ID:      {}\n", order.id));
        output.push_str(&format!("Order:   {}\n", order.text));
        output.push_str(&format!("Table:   {}\n", order.table));
        output.push_str(&format!(
            "Status:  {}\n",
            self.heading(order.status.as_str(), column_color(order.status))
        ));

        output
    }

    fn format_deleted(&self, order_id: &str) -> String {
        format!("{} Deleted order {}", self.heading("✓", Color::Green), order_id)
    }

    fn format_board(&self, view: &BoardView) -> String {
        if view.total() == 0 {
            return "No orders on the board.".to_string();
        }

        let mut sections = Vec::new();
        for column_view in &view.columns {
            let title = format!("{} ({})", column_view.column, column_view.orders.len());
            let mut section = self.heading(&title, column_color(column_view.column));
            section.push('\n');

            if column_view.orders.is_empty() {
                section.push_str("  (empty)");
            } else {
                let mut builder = Builder::default();
                builder.push_record(vec!["ID", "Order", "Table"]);
                for order in &column_view.orders {
                    builder.push_record(vec![
                        order.id.as_str(),
                        order.text.as_str(),
                        order.table.as_str(),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::modern());
                section.push_str(&table.to_string());
            }
            sections.push(section);
        }

        sections.join("\n\n")
    }

    fn format_outputs(&self, outputs: &[BoardOutput]) -> String {
        if outputs.is_empty() {
            return "No events replayed.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Output", "Order", "Column"]);
        for (i, output) in outputs.iter().enumerate() {
            let (kind, order, column) = describe_output(output);
            builder.push_record(vec![(i + 1).to_string(), kind.to_string(), order, column]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        format!("{} {}", self.heading("✓", Color::Green), message)
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let prefix = self.heading("Error:", Color::Red);
        match error.downcast_ref::<AppError>() {
            Some(app_error) if app_error.is_recoverable() => {
                format!("{} {} (fix the input and retry)", prefix, app_error)
            }
            _ => format!("{} {}", prefix, error),
        }
    }
}

/// Plain text output formatter.
///
/// Formats one order per line without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_order(&self, _action: &'static str, order: &Order) -> String {
        format!("{} {} {} {}", order.id, order.status, order.table, order.text)
    }

    fn format_deleted(&self, order_id: &str) -> String {
        order_id.to_string()
    }

    fn format_board(&self, view: &BoardView) -> String {
        let mut output = String::new();
        for column_view in &view.columns {
            for order in &column_view.orders {
                output.push_str(&format!(
                    "{} {} {} {}\n",
                    order.id, column_view.column, order.table, order.text
                ));
            }
        }
        output
    }

    fn format_outputs(&self, outputs: &[BoardOutput]) -> String {
        let mut output = String::new();
        for event_output in outputs {
            let (kind, order, column) = describe_output(event_output);
            let fields: Vec<&str> = [kind, order.as_str(), column.as_str()]
                .into_iter()
                .filter(|field| !field.is_empty())
                .collect();
            output.push_str(&fields.join(" "));
            output.push('\n');
        }
        output
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Splits an event output into kind, order ID and column cells.
fn describe_output(output: &BoardOutput) -> (&'static str, String, String) {
    match output {
        BoardOutput::DragStarted { order_id } => ("drag_started", order_id.clone(), String::new()),
        BoardOutput::Highlight { column, changed } => {
            let kind = if *changed { "highlight" } else { "highlight_kept" };
            (kind, String::new(), column.clone().unwrap_or_default())
        }
        BoardOutput::Moved { order } => ("moved", order.id.clone(), order.status.to_string()),
        BoardOutput::Cancelled { order_id } => {
            ("cancelled", order_id.clone().unwrap_or_default(), String::new())
        }
        BoardOutput::Saved { order } => ("saved", order.id.clone(), order.status.to_string()),
        BoardOutput::Deleted { order_id } => ("deleted", order_id.clone(), String::new()),
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
