use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_lookahead::board::Board;

/// Draws `board` to the terminal, column numbers first
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (0..board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column)? {
                        1 => Color::Red,
                        2 => Color::Yellow,
                        _ => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
