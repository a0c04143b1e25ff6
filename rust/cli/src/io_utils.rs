//! Line input helpers for commands that read from stdin.

use std::io::BufRead;

/// Reads one line, trimmed. Returns `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use tablestakes_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  As Ks Qs Js Ts \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("As Ks Qs Js Ts"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => {
            strip_utf8_bom(&mut line);
            Some(line.trim().to_string())
        }
        Err(_) => None,
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  spaces  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("spaces".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut cursor = Cursor::new("\u{feff}Ah Kd\n".as_bytes());
        assert_eq!(read_stdin_line(&mut cursor), Some("Ah Kd".to_string()));
    }
}
