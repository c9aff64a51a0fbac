//! POK poke-list scripts — the line-oriented trainer format.
//!
//! Grammar, two nested levels:
//!
//! ```text
//! File := Set* 'Y'-line
//! Set  := 'N' name  followed by one or more poke lines; 'Z' flags the last
//! Poke := ('M' | 'Z') bank address value original
//! ```
//!
//! A stored value of 256 is the POPUP sentinel: the loader prompts the user
//! for the byte instead of writing a literal.  Any line whose first
//! character is not one of the expected tags is a structural violation and
//! ends the decode immediately; the format has no resync point.
//!
//! Content is decoded as lossy UTF-8 and empty lines are dropped before the
//! state machine runs, matching how the format's tooling splits on newlines.

use crate::report::{Field, Report, Verdict};

const POPUP_SENTINEL: u32 = 256;

pub fn decode(data: &[u8], _declared_size: u64) -> Report {
    let mut r = Report::new();
    let text = String::from_utf8_lossy(data);
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

    let mut i = 0usize;
    let mut sets = 0usize;
    loop {
        let Some(line) = lines.get(i) else {
            r.error(0, "file ends without a 'Y' terminator line");
            return r.finish(Verdict::Truncated);
        };
        i += 1;

        match line.chars().next() {
            Some('Y') => {
                r.info(0, format!("{sets} poke set(s)"));
                return r.finish(Verdict::Valid);
            }
            Some('N') => {
                let name = line[1..].trim().to_string();
                r.info_field(0, format!("set \"{name}\""), Field::Text { value: name });

                // Poke lines until one is flagged 'Z'.
                loop {
                    let Some(poke_line) = lines.get(i) else {
                        r.error(1, "set ends without a 'Z'-flagged poke line");
                        return r.finish(Verdict::Truncated);
                    };
                    i += 1;

                    match poke_line.chars().next() {
                        Some(tag @ ('M' | 'Z')) => {
                            parse_poke(&poke_line[1..], &mut r);
                            if tag == 'Z' {
                                break;
                            }
                        }
                        Some(c) => {
                            r.error(1, format!("expected an 'M' or 'Z' poke line, found '{c}'"));
                            return r.finish(Verdict::Invalid);
                        }
                        None => {
                            r.error(1, "blank line where a poke line was expected");
                            return r.finish(Verdict::Invalid);
                        }
                    }
                }
                sets += 1;
            }
            Some(c) => {
                r.error(0, format!("expected an 'N' set header or 'Y' terminator, found '{c}'"));
                return r.finish(Verdict::Invalid);
            }
            None => {
                r.error(0, "blank line where a set header was expected");
                return r.finish(Verdict::Invalid);
            }
        }
    }
}

/// One poke: four whitespace-delimited integers after the tag character.
/// Field-level problems are warnings; the set structure stays intact.
fn parse_poke(rest: &str, r: &mut Report) {
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != 4 {
        r.warning(1, format!("wrong number of fields in poke line ({} instead of 4)", fields.len()));
        return;
    }
    let mut values = [0u32; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        match field.parse::<u32>() {
            Ok(v) => *slot = v,
            Err(_) => {
                r.warning(1, format!("non-numeric field \"{field}\" in poke line"));
                return;
            }
        }
    }
    let [bank, address, value, original] = values;

    if value == POPUP_SENTINEL {
        r.info_field(
            1,
            format!("bank {bank}: poke {address}, POPUP (original value {original})"),
            Field::Poke { bank, address, value: None, original },
        );
    } else {
        r.info_field(
            1,
            format!("bank {bank}: poke {address}, {value} (original value {original})"),
            Field::Poke { bank, address, value: Some(value), original },
        );
    }
}
