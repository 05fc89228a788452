//! Landmark trace parsing for the replay shell.
//!
//! A trace is plain text: one hand observation per line,
//! `<timestamp-seconds> <x0> <y0> ... <x20> <y20>` (43 whitespace-separated
//! fields).  Blank lines and `#` comments are skipped.  Adjacent lines
//! sharing a timestamp describe multiple hands detected in the same tick.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::hand::{HandFrame, Point, LANDMARK_COUNT};

/// One tick of input: a timestamp and the hands detected in that frame.
#[derive(Debug, Clone)]
pub struct Tick {
    pub timestamp_s: f64,
    pub hands: Vec<HandFrame>,
}

/// Load and parse a trace file into ticks.
pub fn load(path: &Path) -> Result<Vec<Tick>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing trace {}", path.display()))
}

/// Parse trace text into ticks.
fn parse(text: &str) -> Result<Vec<Tick>> {
    let mut ticks: Vec<Tick> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (timestamp_s, frame) =
            parse_line(line).with_context(|| format!("line {}", lineno + 1))?;
        match ticks.last_mut() {
            Some(tick) if tick.timestamp_s == timestamp_s => tick.hands.push(frame),
            _ => ticks.push(Tick {
                timestamp_s,
                hands: vec![frame],
            }),
        }
    }
    Ok(ticks)
}

/// Parse one observation line: timestamp followed by 21 x/y pairs.
fn parse_line(line: &str) -> Result<(f64, HandFrame)> {
    let mut fields = line.split_whitespace();
    let timestamp_s: f64 = fields
        .next()
        .context("missing timestamp")?
        .parse()
        .context("bad timestamp")?;

    let mut points = [Point::default(); LANDMARK_COUNT];
    for (i, point) in points.iter_mut().enumerate() {
        let x: f32 = fields
            .next()
            .with_context(|| format!("missing x for landmark {}", i))?
            .parse()
            .with_context(|| format!("bad x for landmark {}", i))?;
        let y: f32 = fields
            .next()
            .with_context(|| format!("missing y for landmark {}", i))?
            .parse()
            .with_context(|| format!("bad y for landmark {}", i))?;
        *point = Point { x, y };
    }
    if fields.next().is_some() {
        bail!("trailing fields after {} landmarks", LANDMARK_COUNT);
    }
    Ok((timestamp_s, HandFrame::new(points)))
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandLandmark;

    fn line(timestamp: f64) -> String {
        let mut s = format!("{}", timestamp);
        for i in 0..LANDMARK_COUNT {
            s.push_str(&format!(" 0.{:02} 0.5", i + 1));
        }
        s
    }

    #[test]
    fn test_parse_single_line() {
        let ticks = parse(&line(1.5)).unwrap();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].timestamp_s, 1.5);
        assert_eq!(ticks[0].hands.len(), 1);
        let wrist = ticks[0].hands[0].point(HandLandmark::Wrist);
        assert!((wrist.x - 0.01).abs() < 1e-6);
        assert!((wrist.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = format!("# header\n\n{}\n  \n# tail\n", line(2.0));
        let ticks = parse(&text).unwrap();
        assert_eq!(ticks.len(), 1);
    }

    #[test]
    fn test_equal_timestamps_coalesce_into_one_tick() {
        let text = format!("{}\n{}\n{}\n", line(1.0), line(1.0), line(2.0));
        let ticks = parse(&text).unwrap();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[0].hands.len(), 2);
        assert_eq!(ticks[1].hands.len(), 1);
    }

    #[test]
    fn test_short_line_rejected() {
        let err = parse("1.0 0.1 0.2 0.3").unwrap_err();
        assert!(format!("{:#}", err).contains("line 1"));
    }

    #[test]
    fn test_trailing_fields_rejected() {
        let text = format!("{} 0.9", line(1.0));
        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_bad_number_rejected() {
        let text = line(1.0).replace("0.02", "nope");
        assert!(parse(&text).is_err());
    }
}
