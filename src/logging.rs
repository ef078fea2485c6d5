use std::io::Write;

use chrono::Utc;
use colored::{Color, Colorize as _};
use env_logger::{Builder, Env};
use log::Level;

pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let env = Env::default().default_filter_or(default_level);

    let mut builder = Builder::new();
    builder.parse_env(env);

    builder.format(|f, record| {
        let (tag, color) = level_style(record.level());
        let time = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed();
        let target = record.target().dimmed();
        let message = record.args().to_string().color(color);

        writeln!(f, "{time} [{}@{target}] {message}", tag.color(color))
    });

    builder.init();
}

const fn level_style(level: Level) -> (&'static str, Color) {
    match level {
        Level::Trace => ("T", Color::Magenta),
        Level::Debug => ("D", Color::Blue),
        Level::Info => ("I", Color::Green),
        Level::Warn => ("W", Color::Yellow),
        Level::Error => ("E", Color::Red),
    }
}
