//! Headless replay: a JSON-lines script in, sink events out.
//!
//! Each script line is either an input event (`{"event": "flip_card", ...}`)
//! or a clock step (`{"advance_ms": 500}`). Blank lines and lines starting
//! with `#` are skipped. After every step the recorded sink events are
//! written out one JSON object per line, followed by a
//! `{"rejected": ...}` line when the input was refused. A clock step longer
//! than [`MAX_ADVANCE_MS`] stops the replay with an error.

use std::io::{BufRead, Write};
use std::time::Duration;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Hub, InputEvent, RecordingSink};

/// Largest clock step a script may take, one day in milliseconds.
pub const MAX_ADVANCE_MS: u64 = 24 * 60 * 60 * 1000;

/// One line of a replay script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Move the clock forward.
    Advance {
        /// Milliseconds to advance.
        advance_ms: u64,
    },
    /// Feed one input event.
    Input(InputEvent),
}

#[derive(Debug, Serialize)]
struct Rejected<'a> {
    rejected: RejectedBody<'a>,
}

#[derive(Debug, Serialize)]
struct RejectedBody<'a> {
    line: usize,
    action: &'a str,
    reason: String,
}

/// Totals for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Script lines executed.
    pub steps: usize,
    /// Inputs the hub refused.
    pub rejected: usize,
    /// Sink events written.
    pub events: usize,
}

/// Replay error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ReplayError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ReplayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Runs `script` against `hub`, writing sink events to `out`.
///
/// A malformed script line stops the replay. Rejected inputs do not.
#[instrument(skip_all)]
pub fn run_script(
    hub: &mut Hub<RecordingSink>,
    script: impl BufRead,
    mut out: impl Write,
) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();
    flush_events(hub, &mut out, &mut summary)?;

    for (index, line) in script.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let step: ScriptStep = serde_json::from_str(trimmed)
            .map_err(|e| ReplayError::new(format!("Script line {}: {}", number, e)))?;
        summary.steps += 1;
        debug!(line = number, ?step, "Replaying step");

        let rejection = match step {
            ScriptStep::Advance { advance_ms } if advance_ms > MAX_ADVANCE_MS => {
                return Err(ReplayError::new(format!(
                    "Script line {}: advance_ms {} exceeds the {} ms limit",
                    number, advance_ms, MAX_ADVANCE_MS
                )));
            }
            ScriptStep::Advance { advance_ms } => {
                hub.advance(Duration::from_millis(advance_ms));
                None
            }
            ScriptStep::Input(event) => {
                let action = event.action();
                hub.dispatch(event).err().map(|err| (action, err))
            }
        };

        flush_events(hub, &mut out, &mut summary)?;
        if let Some((action, err)) = rejection {
            summary.rejected += 1;
            let record = Rejected {
                rejected: RejectedBody {
                    line: number,
                    action,
                    reason: err.kind().to_string(),
                },
            };
            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    info!(
        steps = summary.steps,
        rejected = summary.rejected,
        events = summary.events,
        "Replay finished"
    );
    Ok(summary)
}

fn flush_events(
    hub: &mut Hub<RecordingSink>,
    out: &mut impl Write,
    summary: &mut ReplaySummary,
) -> Result<(), ReplayError> {
    for event in hub.sink_mut().drain() {
        serde_json::to_writer(&mut *out, &event)?;
        writeln!(out)?;
        summary.events += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameKind, Selection};

    #[test]
    fn test_parses_both_step_shapes() {
        let advance: ScriptStep = serde_json::from_str(r#"{"advance_ms": 250}"#).expect("advance");
        assert_eq!(advance, ScriptStep::Advance { advance_ms: 250 });

        let input: ScriptStep =
            serde_json::from_str(r#"{"event":"select_game","selection":{"game":"matching_cards"}}"#)
                .expect("input");
        assert_eq!(
            input,
            ScriptStep::Input(InputEvent::SelectGame {
                selection: Selection::Game(GameKind::MatchingCards)
            })
        );
    }
}
