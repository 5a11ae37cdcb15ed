//! Stdin and history-file helpers shared by the commands.

use std::io::BufRead;

/// Read one line from `stdin`, trimmed. `None` on EOF or a read error, which
/// the interactive loop treats as the player leaving.
///
/// ```rust
/// use std::io::Cursor;
/// # use bjlite_cli::io_utils::read_stdin_line;
/// let mut input = Cursor::new(&b"  hit\n"[..]);
/// assert_eq!(read_stdin_line(&mut input), Some("hit".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a UTF-8 text file, dropping a leading byte order mark.
pub fn read_text(path: &str) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
