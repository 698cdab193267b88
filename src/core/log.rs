use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

/// Column limit for "operation (target)".
const OP_WIDTH_LIMIT: usize = 40;

/// ANSI color of an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    /// One formatted line per log row, oldest first.
    pub fn render(rows: &[LogRow]) -> Vec<String> {
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let op_w = rows
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);

        rows.iter()
            .map(|r| {
                let visible = truncate(&op_target(r), OP_WIDTH_LIMIT);
                let color = color_for_operation(&r.operation);

                // only the operation word is colored
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {} | {}{} => {}",
                    r.id,
                    r.date,
                    colored,
                    padding,
                    r.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        for line in Self::render(&rows) {
            println!("{}", line);
        }
        Ok(())
    }
}
