use std::io::{BufRead, Write};

use anyhow::Result;
use ivory_config::PianoConfig;
use ivory_input::{InputSession, ScriptedDevice};
use ivory_model::{NoteNameTable, NoteSet};
use ivory_song::SongNotationParser;
use tracing::{debug, info};

/// Totals reported after playing a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaySummary {
    pub steps: usize,
    pub rests: usize,
    pub dropped_tokens: usize,
}

/// Totals reported after replaying an input script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub ticks: usize,
    pub presses: usize,
    pub mode_changes: usize,
    pub exited: bool,
}

fn describe(table: &NoteNameTable, notes: &NoteSet) -> String {
    if notes.is_empty() {
        "-".to_string()
    } else {
        table.names_in(notes).join(" ")
    }
}

/// Print every step of a song, one line per step.
pub fn play<R: BufRead, W: Write>(
    config: &PianoConfig,
    mut reader: R,
    out: &mut W,
) -> Result<PlaySummary> {
    let table = config.note_name_table();
    let mut parser = SongNotationParser::new(table.clone());
    let mut session = InputSession::new(config)?;
    let mut summary = PlaySummary::default();

    while session.load_next_song_line(&mut parser, &mut reader)? {
        summary.steps += 1;
        let notes = session.song_notes();
        if notes.is_empty() {
            summary.rests += 1;
        }
        writeln!(out, "{:>4}  {}", summary.steps, describe(&table, &notes))?;
    }

    summary.dropped_tokens = parser.dropped_tokens();
    writeln!(
        out,
        "{} steps, {} unrecognized tokens",
        summary.steps, summary.dropped_tokens
    )?;
    info!(
        steps = summary.steps,
        rests = summary.rests,
        dropped = summary.dropped_tokens,
        "song finished"
    );
    Ok(summary)
}

/// Run an input session against a JSON input script until it runs out or
/// the user requests exit.
pub fn replay<W: Write>(config: &PianoConfig, script: &str, out: &mut W) -> Result<ReplaySummary> {
    let table = config.note_name_table();
    let mut device = ScriptedDevice::from_json(script)?;
    let mut session = InputSession::new(config)?;
    let mut summary = ReplaySummary::default();

    while !device.is_finished() {
        summary.ticks += 1;
        let tick = summary.ticks;
        let active = session.poll_user_input(&mut device);
        debug!("tick {}\n{}", tick, session.format_user_input());
        if !active {
            continue;
        }

        let pressed = session.user_notes_to_play();
        if !pressed.is_empty() {
            summary.presses += pressed.len();
            writeln!(out, "{:>4}  play {}", tick, describe(&table, &pressed))?;
        }

        if session.mode_changed() {
            summary.mode_changes += 1;
            let mode = session.current_mode();
            let label = config
                .mode_buttons
                .get(mode)
                .map(|b| b.label.as_str())
                .unwrap_or_default();
            writeln!(out, "{:>4}  mode {} {}", tick, mode, label)?;
            session.clear_mode_changed();
        }

        if session.exit_requested() {
            writeln!(out, "{:>4}  exit", tick)?;
            summary.exited = true;
            break;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(song: &str) -> (PlaySummary, String) {
        let mut out = Vec::new();
        let summary = play(&PianoConfig::default(), Cursor::new(song), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    fn run_replay(script: &str) -> (ReplaySummary, String) {
        let mut out = Vec::new();
        let summary = replay(&PianoConfig::default(), script, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn play_lists_steps() {
        let (summary, out) = run_play("C4 [E4 G4]\nZZ ");
        assert_eq!(
            summary,
            PlaySummary {
                steps: 3,
                rests: 1,
                dropped_tokens: 1
            }
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "   1  C4");
        assert_eq!(lines[1], "   2  E4 G4");
        assert_eq!(lines[2], "   3  -");
        assert_eq!(lines[3], "3 steps, 1 unrecognized tokens");
    }

    #[test]
    fn play_empty_song() {
        let (summary, out) = run_play("");
        assert_eq!(summary.steps, 0);
        assert_eq!(out, "0 steps, 0 unrecognized tokens\n");
    }

    #[test]
    fn replay_reports_presses_modes_and_exit() {
        let script = r#"[
            {"held": [0]},
            {"held": [0]},
            {"held": [0, 4]},
            {"pointer": {"x": 300, "y": 60}},
            {"exit": true},
            {"held": [7]}
        ]"#;
        let (summary, out) = run_replay(script);
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.presses, 2);
        assert_eq!(summary.mode_changes, 1);
        assert!(summary.exited);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   1  play C4",
                "   3  play E4",
                "   4  mode 2 Play Along",
                "   5  exit"
            ]
        );
    }

    #[test]
    fn replay_empty_script() {
        let (summary, out) = run_replay("[]");
        assert_eq!(summary, ReplaySummary::default());
        assert!(out.is_empty());
    }

    #[test]
    fn replay_rejects_bad_script() {
        let mut out = Vec::new();
        assert!(replay(&PianoConfig::default(), "nope", &mut out).is_err());
    }
}
