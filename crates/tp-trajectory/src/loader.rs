//! Fixed-format trajectory loader.
//!
//! # File format
//!
//! Plain text, whitespace-delimited.  The horizon `H` is not stored in the
//! file; the caller supplies it.
//!
//! ```text
//! ListRecord                              ← optional non-numeric marker
//! 2                                       ← n_vehicles
//! 1 2 4.5 1.8                             ← id cls length width  (× n_vehicles)
//! 2 2 4.8 2.0
//! 300 12                                  ← header token + rest of line (ignored)
//! 1 (0.0 1.0 0.5) (1 0 0 0 0 0 0) 10.0    ← f0 x y theta f1..f7 v  (× n_vehicles, × H)
//! 2 (5.0 1.0 0.5) (1 0 0 0 0 0 0) 12.0
//! …
//! ```
//!
//! The definition section and the header are read as a token stream, so
//! line breaks inside them are not significant.  State rows are read one
//! line each: `(` and `)` are stripped, then the line is split on
//! whitespace.  Only `x`, `y`, `theta` and `v` are kept; the other eight
//! fields must be present but are not interpreted.
//!
//! **Block boundaries.**  Blank lines separate per-tick blocks when most of
//! the groups they delimit hold exactly `n_vehicles` rows; every block up to
//! `H` must then hold exactly `n_vehicles` rows, except that a short final
//! block means the file was cut off.  Otherwise blank lines are stray and
//! skipped, and rows are taken `n_vehicles` at a time.  Blocks after the
//! first `H` are ignored.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::data::{TrajectoryData, VehicleDefs, VehicleState};
use crate::error::{ParseError, ParseErrorKind};
use crate::TrajectoryResult;

/// Fields per state row after parentheses are removed.
const ROW_FIELDS: usize = 12;

const X_FIELD:     usize = 1;
const Y_FIELD:     usize = 2;
const THETA_FIELD: usize = 3;
const V_FIELD:     usize = 11;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a trajectory file, reading `horizon` per-tick blocks.
pub fn load_trajectory(path: &Path, horizon: usize) -> TrajectoryResult<TrajectoryData> {
    let file = std::fs::File::open(path)?;
    let data = load_trajectory_reader(file, horizon)?;
    info!(
        path = %path.display(),
        n_vehicles = data.n_vehicles(),
        horizon = data.horizon(),
        "loaded trajectory"
    );
    Ok(data)
}

/// Like [`load_trajectory`] but accepts any `Read` source.
pub fn load_trajectory_reader<R: Read>(mut reader: R, horizon: usize) -> TrajectoryResult<TrajectoryData> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_trajectory(&text, horizon)?)
}

/// Parse trajectory text, reading exactly `horizon` per-tick blocks.
pub fn parse_trajectory(text: &str, horizon: usize) -> Result<TrajectoryData, ParseError> {
    let mut cursor = Cursor::new(text);

    // ── Vehicle count (after an optional format marker) ───────────────────
    let mut first = cursor.token("vehicle count")?;
    if first.parse::<f64>().is_err() {
        first = cursor.token("vehicle count")?;
    }
    let n_vehicles: usize = cursor.number(first, "vehicle count")?;
    if n_vehicles == 0 {
        return Err(ParseError::new(
            ParseErrorKind::VehicleCountMismatch,
            cursor.line_no(),
            "file declares zero vehicles",
        ));
    }

    // ── Vehicle definitions ───────────────────────────────────────────────
    let mut ids     = Vec::with_capacity(n_vehicles);
    let mut classes = Vec::with_capacity(n_vehicles);
    let mut lengths = Vec::with_capacity(n_vehicles);
    let mut widths  = Vec::with_capacity(n_vehicles);
    for _ in 0..n_vehicles {
        let tok = cursor.token("vehicle id")?;
        ids.push(cursor.number::<i32>(tok, "vehicle id")?);
        let tok = cursor.token("vehicle class")?;
        classes.push(cursor.number::<i32>(tok, "vehicle class")?);
        let tok = cursor.token("vehicle length")?;
        lengths.push(cursor.number::<f64>(tok, "vehicle length")?);
        let tok = cursor.token("vehicle width")?;
        widths.push(cursor.number::<f64>(tok, "vehicle width")?);
    }
    let defs = VehicleDefs { id: ids, cls: classes, length: lengths, width: widths, n_vehicles };

    // ── Header line (discarded) ───────────────────────────────────────────
    cursor.token("state header")?;
    let body = cursor.remaining_lines();

    // ── Per-tick blocks ───────────────────────────────────────────────────
    let blocks = split_blocks(&body, n_vehicles, horizon)?;
    let states = blocks
        .into_iter()
        .map(|rows| {
            let mut state = VehicleState::with_capacity(n_vehicles);
            for (line_no, line) in rows {
                let (x, y, theta, v) = parse_row(line_no, line)?;
                state.push(x, y, theta, v);
            }
            Ok(state)
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    debug!(n_vehicles, horizon, "parsed trajectory text");
    Ok(TrajectoryData::from_parts(defs, states))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

type Line<'a> = (usize, &'a str);

/// Token reader over the definition section.  Tokens cross line breaks;
/// `remaining_lines` hands the untouched rest of the file to the row parser.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    line:  usize,
    rest:  &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let rest = lines.first().copied().unwrap_or("");
        Self { lines, line: 0, rest }
    }

    /// 1-based number of the line the cursor is on.
    fn line_no(&self) -> usize {
        self.line.min(self.lines.len().saturating_sub(1)) + 1
    }

    fn token(&mut self, what: &str) -> Result<&'a str, ParseError> {
        loop {
            let trimmed = self.rest.trim_start();
            if !trimmed.is_empty() {
                let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let (tok, rest) = trimmed.split_at(end);
                self.rest = rest;
                return Ok(tok);
            }
            self.line += 1;
            match self.lines.get(self.line) {
                Some(next) => self.rest = next,
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::TruncatedFile,
                        self.line_no(),
                        format!("end of file while expecting {what}"),
                    ));
                }
            }
        }
    }

    fn number<T: FromStr>(&self, tok: &str, what: &str) -> Result<T, ParseError> {
        tok.parse::<T>().map_err(|_| {
            ParseError::new(
                ParseErrorKind::NonNumericToken,
                self.line_no(),
                format!("invalid {what} {tok:?}"),
            )
        })
    }

    /// Lines after the current one, numbered, with blank lines at either end
    /// removed.  The rest of the current line is discarded.
    fn remaining_lines(&self) -> Vec<Line<'a>> {
        let mut body: Vec<Line<'a>> = self.lines
            .iter()
            .enumerate()
            .skip(self.line + 1)
            .map(|(i, l)| (i + 1, *l))
            .collect();
        while body.last().is_some_and(|(_, l)| l.trim().is_empty()) {
            body.pop();
        }
        let leading = body.iter().take_while(|(_, l)| l.trim().is_empty()).count();
        body.drain(..leading);
        body
    }
}

/// Cut the state section into `horizon` blocks of `n_vehicles` rows.
///
/// Blank lines are block separators only when most of the groups they
/// delimit hold exactly `n_vehicles` rows.  Otherwise they are stray and
/// skipped, and the remaining rows are taken `n_vehicles` at a time.
fn split_blocks<'a>(
    body:       &[Line<'a>],
    n_vehicles: usize,
    horizon:    usize,
) -> Result<Vec<Vec<Line<'a>>>, ParseError> {
    let end_line = body.last().map_or(0, |(n, _)| *n) + 1;
    let is_blank = |(_, l): &Line<'a>| l.trim().is_empty();

    let groups: Vec<&[Line<'a>]> = body
        .split(|line| is_blank(line))
        .filter(|group| !group.is_empty())
        .collect();
    let full = groups.iter().filter(|g| g.len() == n_vehicles).count();
    let separated = groups.len() > 1 && full * 2 > groups.len();

    let blocks: Vec<Vec<Line<'a>>> = if separated {
        let n_groups = groups.len();
        for (t, group) in groups.iter().enumerate().take(horizon) {
            if group.len() == n_vehicles {
                continue;
            }
            if t + 1 == n_groups && group.len() < n_vehicles {
                // The file ends inside this block.
                return Err(ParseError::new(
                    ParseErrorKind::TruncatedFile,
                    end_line,
                    format!("block {t} has {} of {n_vehicles} rows", group.len()),
                ));
            }
            return Err(ParseError::new(
                ParseErrorKind::VehicleCountMismatch,
                group[0].0,
                format!("block {t} has {} rows, expected {n_vehicles}", group.len()),
            ));
        }
        groups.into_iter().take(horizon).map(<[Line<'a>]>::to_vec).collect()
    } else {
        let rows: Vec<Line<'a>> = body.iter().filter(|line| !is_blank(*line)).copied().collect();
        let blocks: Vec<Vec<Line<'a>>> = rows.chunks(n_vehicles).take(horizon).map(<[Line<'a>]>::to_vec).collect();
        if let Some((t, short)) = blocks.iter().enumerate().find(|(_, b)| b.len() != n_vehicles) {
            // Only the trailing chunk can be short.
            return Err(ParseError::new(
                ParseErrorKind::TruncatedFile,
                end_line,
                format!("block {t} has {} of {n_vehicles} rows", short.len()),
            ));
        }
        blocks
    };

    if blocks.len() < horizon {
        return Err(ParseError::new(
            ParseErrorKind::TruncatedFile,
            end_line,
            format!("found {} of {horizon} state blocks", blocks.len()),
        ));
    }
    Ok(blocks)
}

fn parse_row(line_no: usize, line: &str) -> Result<(f32, f32, f64, f64), ParseError> {
    let cleaned: String = line.chars().filter(|&c| c != '(' && c != ')').collect();
    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    if fields.len() < ROW_FIELDS {
        return Err(ParseError::new(
            ParseErrorKind::TruncatedFile,
            line_no,
            format!("state row has {} fields, expected {ROW_FIELDS}", fields.len()),
        ));
    }

    fn field<T: FromStr>(fields: &[&str], i: usize, what: &str, line_no: usize) -> Result<T, ParseError> {
        fields[i].parse::<T>().map_err(|_| {
            ParseError::new(
                ParseErrorKind::NonNumericToken,
                line_no,
                format!("invalid {what} {:?}", fields[i]),
            )
        })
    }

    Ok((
        field(&fields, X_FIELD, "x", line_no)?,
        field(&fields, Y_FIELD, "y", line_no)?,
        field(&fields, THETA_FIELD, "theta", line_no)?,
        field(&fields, V_FIELD, "v", line_no)?,
    ))
}
