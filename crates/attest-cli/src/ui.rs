//! Terminal preferences for table output, fixed once per invocation.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals get the natural table width instead.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Highlight compliance and risk cells.
    pub table_color: bool,
    /// Shrink tables to this width when set.
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(
        flags: &GlobalFlags,
        stdout_is_tty: bool,
        no_color: bool,
        columns: Option<&str>,
    ) -> Self {
        let tables = flags.format == OutputFormat::Table;
        let table_color = tables
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout_is_tty && !no_color && !flags.quiet,
            };

        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TABLE_WIDTH);

        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::detect(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences chosen by [`init`]; plain output if it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
