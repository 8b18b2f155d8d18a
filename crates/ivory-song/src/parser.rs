/// Song notation parser.
///
/// A song is a stream of steps. Each step is either a single note token
/// bounded by a space (`C4 `) or a bracketed chord (`[C4 E4 G4]`) followed
/// by exactly one terminator character. Tokens that do not name a known
/// note are dropped, so a malformed step degrades to a rest.
use std::io::{self, BufRead};

use ivory_model::{NoteNameTable, NoteSet};
use tracing::trace;

const CHORD_OPEN: u8 = b'[';
const CHORD_CLOSE: u8 = b']';
const TOKEN_DELIMITER: u8 = b' ';
const LINE_TERMINATOR: u8 = b'\n';

/// Parses song notation one step at a time from a buffered reader.
#[derive(Debug, Clone, Default)]
pub struct SongNotationParser {
    table: NoteNameTable,
    /// Running count of non-empty tokens that matched no note name.
    dropped_tokens: usize,
}

impl SongNotationParser {
    pub fn new(table: NoteNameTable) -> Self {
        Self {
            table,
            dropped_tokens: 0,
        }
    }

    /// Read the next step into `notes`.
    ///
    /// `notes` is cleared first. Returns `Ok(false)` when the stream is
    /// exhausted before any content, `Ok(true)` otherwise (even if no
    /// token resolved).
    pub fn read_line<R: BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
        notes: &mut NoteSet,
    ) -> io::Result<bool> {
        notes.clear();

        let Some(first) = peek_byte(reader)? else {
            return Ok(false);
        };

        if first == CHORD_OPEN {
            let mut chord = Vec::new();
            reader.read_until(CHORD_CLOSE, &mut chord)?;
            let body = chord.strip_prefix(&[CHORD_OPEN]).unwrap_or(&chord[..]);
            let body = body.strip_suffix(&[CHORD_CLOSE]).unwrap_or(body);
            for token in body.split(|&b| b == TOKEN_DELIMITER) {
                self.mark(token, notes);
            }
            // Step terminator after the closing bracket.
            skip_byte(reader)?;
        } else {
            let token = read_token(reader)?;
            self.mark(&token, notes);
        }

        Ok(true)
    }

    /// Iterate over the remaining steps of `reader`.
    pub fn steps<R: BufRead>(&mut self, reader: R) -> Steps<'_, R> {
        Steps {
            parser: self,
            reader,
        }
    }

    /// Number of unresolved tokens seen since construction or the last
    /// [`reset_diagnostics`](Self::reset_diagnostics).
    pub fn dropped_tokens(&self) -> usize {
        self.dropped_tokens
    }

    pub fn reset_diagnostics(&mut self) {
        self.dropped_tokens = 0;
    }

    fn mark(&mut self, token: &[u8], notes: &mut NoteSet) {
        if token.is_empty() {
            return;
        }
        let slot = std::str::from_utf8(token)
            .ok()
            .and_then(|t| self.table.lookup(t));
        match slot {
            Some(slot) => {
                if let Err(e) = notes.try_insert(slot) {
                    debug_assert!(false, "note name table larger than key slots: {e}");
                    self.dropped_tokens += 1;
                    trace!(slot, "dropping note outside key slots");
                }
            }
            None => {
                self.dropped_tokens += 1;
                trace!(token = %String::from_utf8_lossy(token), "dropping unknown note token");
            }
        }
    }
}

/// Iterator over the steps of a song, see [`SongNotationParser::steps`].
pub struct Steps<'a, R> {
    parser: &'a mut SongNotationParser,
    reader: R,
}

impl<R: BufRead> Iterator for Steps<'_, R> {
    type Item = io::Result<NoteSet>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut notes = NoteSet::new();
        match self.parser.read_line(&mut self.reader, &mut notes) {
            Ok(true) => Some(Ok(notes)),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

fn peek_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

fn skip_byte<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<()> {
    if peek_byte(reader)?.is_some() {
        reader.consume(1);
    }
    Ok(())
}

/// Read up to and including the next space or newline. The delimiter is
/// consumed but not returned.
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut token = Vec::new();
    loop {
        let (found, used) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(token);
            }
            match available
                .iter()
                .position(|&b| b == TOKEN_DELIMITER || b == LINE_TERMINATOR)
            {
                Some(i) => {
                    token.extend_from_slice(&available[..i]);
                    (true, i + 1)
                }
                None => {
                    token.extend_from_slice(available);
                    (false, available.len())
                }
            }
        };
        reader.consume(used);
        if found {
            return Ok(token);
        }
    }
}
