use crate::error::CountError;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// Count the lines of a file, decoding it as strict UTF-8.
///
/// A line is a record ended by `\n`, `\r\n` or a lone `\r`; a trailing
/// record without a terminator counts too. An empty file has 0 lines.
///
/// # Errors
/// [`CountError::Decode`] when the content is not valid UTF-8,
/// [`CountError::Io`] when the file cannot be opened or read.
pub fn count_lines(path: &Path) -> Result<u64, CountError> {
    let file = File::open(path).map_err(|source| CountError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    count_reader(file, path)
}

/// Streaming counter behind [`count_lines`]. `path` is only used for errors.
///
/// UTF-8 is validated chunk by chunk; a multi-byte sequence split across two
/// reads is carried over to the next one.
pub fn count_reader<R: Read>(mut reader: R, path: &Path) -> Result<u64, CountError> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut carry = 0usize;
    // Byte offset of buf[0] within the file.
    let mut offset = 0u64;
    let mut tally = LineTally::default();

    loop {
        let n = match reader.read(&mut buf[carry..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CountError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        // Continuation bytes are never CR or LF, so the raw bytes can be
        // tallied before validation.
        tally.feed(&buf[carry..carry + n]);

        let filled = carry + n;
        carry = match std::str::from_utf8(&buf[..filled]) {
            Ok(_) => 0,
            Err(e) if e.error_len().is_none() => {
                let valid = e.valid_up_to();
                buf.copy_within(valid..filled, 0);
                filled - valid
            }
            Err(e) => {
                return Err(CountError::Decode {
                    path: path.to_path_buf(),
                    offset: offset + e.valid_up_to() as u64,
                });
            }
        };
        offset += (filled - carry) as u64;
    }

    if carry > 0 {
        // Truncated sequence at end of file.
        return Err(CountError::Decode {
            path: path.to_path_buf(),
            offset,
        });
    }

    Ok(tally.finish())
}

/// Incremental record counter with universal newline handling.
#[derive(Debug, Default, Clone, Copy)]
struct LineTally {
    terminators: u64,
    seen_bytes: bool,
    last_was_cr: bool,
    ends_with_terminator: bool,
}

impl LineTally {
    fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };

        if !self.last_was_cr && memchr::memchr(b'\r', chunk).is_none() {
            self.terminators += bytecount::count(chunk, b'\n') as u64;
        } else {
            let mut prev_cr = self.last_was_cr;
            let mut prev_pos: Option<usize> = None;
            for pos in memchr::memchr2_iter(b'\n', b'\r', chunk) {
                let adjacent = match prev_pos {
                    Some(p) => p + 1 == pos,
                    None => pos == 0,
                };
                let is_crlf_tail = chunk[pos] == b'\n' && prev_cr && adjacent;
                if !is_crlf_tail {
                    self.terminators += 1;
                }
                prev_cr = chunk[pos] == b'\r';
                prev_pos = Some(pos);
            }
        }

        self.seen_bytes = true;
        self.last_was_cr = last == b'\r';
        self.ends_with_terminator = last == b'\n' || last == b'\r';
    }

    fn finish(self) -> u64 {
        let partial = self.seen_bytes && !self.ends_with_terminator;
        self.terminators + u64::from(partial)
    }
}
