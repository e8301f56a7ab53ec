//! ASCII startup banner (NOTE-SYNC) using the bundled figlet standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Prints "NOTE-SYNC" in figlet standard font, cyan, plus the version line.
pub fn print_welcome() {
    let mut out = stdout();
    let font = FIGfont::standard().expect("figlet standard font");
    let figure = font.convert("NOTE-SYNC").expect("figlet convert NOTE-SYNC");

    let _ = out.execute(SetForegroundColor(Color::Cyan));
    for line in figure.to_string().lines() {
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
    }
    let _ = out.execute(SetForegroundColor(Color::DarkGrey));
    let _ = out.execute(Print(format!("v{}\r\n\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
