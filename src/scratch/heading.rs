//! Heading blocks.
//!
//! The heading block is the leading run of `#` lines in a scratch file. Each
//! new day gets a fresh one; the body below it carries over untouched.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

/// Lines starting with this byte belong to the heading block.
pub const MARKER: u8 = b'#';

const BORDER: &str = "# ─────────────────────────────";

/// Fresh heading block for `date`, including the blank separator line.
pub fn render(date: NaiveDate) -> String {
    format!(
        "{BORDER}\n# scratch for {}\n{BORDER}\n\n",
        date.format("%Y-%m-%d")
    )
}

/// Copy `input` to `output`, replacing its heading block with one for `date`.
///
/// Lines are handled as bytes so non-UTF-8 notes survive. `\n` and `\r\n`
/// endings are both accepted; every line is written back with `\n`.
pub fn rewrite<R, W>(mut input: R, mut output: W, date: NaiveDate) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let heading = render(date);
    let mut in_heading = true;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);

        if in_heading {
            if line.first() == Some(&MARKER) {
                continue;
            }
            output.write_all(heading.as_bytes())?;
            in_heading = false;
        }

        output.write_all(line)?;
        output.write_all(b"\n")?;
    }

    // Empty or all-heading source
    if in_heading {
        output.write_all(heading.as_bytes())?;
    }

    output.flush()
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
