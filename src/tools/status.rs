//! Macro Log status tool
//!
//! Runtime status and usage notes for the MCP client.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage notes for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Macro Log Instructions

Macro Log keeps one running total of calories, protein, fat and carbs for
today, plus a library of named entries that can be logged again in one step.

## Logging an entry

Either fill the draft field by field:
1. `set_draft_field` with field `name`, `calories`, `protein`, `fat` or `carbs`
2. `submit_entry`

or do both at once with `log_entry`. Fields left out of `log_entry` keep
their current draft value (0 for untouched numbers).

- Numbers are typed as text. Blank text counts as 0; text that is not a
  number is stored as NaN and makes that total NaN for the rest of the day.
- With a name, the entry is also saved to the library (replacing any entry
  with the same name) and the draft is cleared.
- Without a name, the macros are still added to today's totals, nothing is
  saved and the draft is kept as it was.
- `reset_entry` clears the draft.

## Library

- `list_library` / `get_library_entry` show saved entries.
- `log_library_item` adds a saved entry to today's totals. An unknown name
  does nothing (`found: false`).

## Totals

- `get_day` returns today's totals; `render_view` returns the whole page.
- Totals only ever grow. There is no undo, no deletion and no history of
  earlier days.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct MacroLogStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub day: String,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    pub fn get_status(&self, day: &str) -> MacroLogStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MacroLogStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            day: day.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
