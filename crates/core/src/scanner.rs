//! Left-to-right scanner splitting a template into segments.
//!
//! A bracketed span starts at a `{`, takes the whole run of `{`, then the
//! shortest stretch of text up to the next `}`, then the whole run of `}`.
//! The stretch may not cross a line terminator. Text outside any span is
//! literal, including stray `}` and `{` with no reachable closing bracket.

use std::ops::Range;

use log::trace;

use crate::field::Field;

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'s> {
    /// Text copied to the output unchanged.
    Literal(&'s str),
    /// A doubled-bracket escape; holds the text emitted for it.
    Escaped(&'s str),
    /// A replacement field.
    Field(Field<'s>),
    /// A span whose brackets are unbalanced, such as `{{}`.
    Malformed(Range<usize>),
}

/// Splits `template` into segments.
///
/// Scanning never fails; malformed spans are reported as segments so that
/// errors surface in template order when rendering.
#[must_use]
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut position = 0;

    while position < bytes.len() {
        if bytes[position] != b'{' {
            position += 1;
            continue;
        }

        match find_span_end(template, position) {
            Ok(end) => {
                if literal_start < position {
                    segments.push(Segment::Literal(&template[literal_start..position]));
                }
                segments.push(classify(template, position..end));
                position = end;
                literal_start = end;
            }
            // No `{` before `resume` can open a span either.
            Err(resume) => position = resume,
        }
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    trace!("Scanned {} segment(s) from `{}`", segments.len(), template);
    segments
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Finds the end of the span opening at `start`, or the position to resume
/// scanning from when no span opens there.
fn find_span_end(template: &str, start: usize) -> Result<usize, usize> {
    let rest = &template[start..];
    let opening = rest.bytes().take_while(|b| *b == b'{').count();
    let body_start = start + opening;
    let body = &rest[opening..];

    let Some(stop) = body.find(|c: char| c == '}' || is_line_terminator(c)) else {
        return Err(template.len());
    };

    let tail = &body[stop..];
    if !tail.starts_with('}') {
        return Err(body_start + stop);
    }

    let closing = tail.bytes().take_while(|b| *b == b'}').count();
    Ok(body_start + stop + closing)
}

fn classify(template: &str, span: Range<usize>) -> Segment<'_> {
    // Spans always start with `{` and end with `}`, both single bytes.
    let inner = &template[span.start + 1..span.end - 1];

    let opens = inner.starts_with('{');
    let closes = inner.ends_with('}');

    if opens && closes {
        Segment::Escaped(inner)
    } else if opens || closes {
        Segment::Malformed(span)
    } else {
        Segment::Field(Field::new(span, inner))
    }
}
