/// Round-trip a block of text through the user's editor.
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// $VISUAL, then $EDITOR, then vi.
pub fn editor_command() -> String {
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Write `text` to a scratch file in `dir`, open it in `editor` and return
/// what the file holds once the editor exits successfully.
///
/// `editor` may carry arguments ("code --wait"). The scratch file is removed
/// on every return path, including a failed or missing editor.
pub fn edit_text(editor: &str, dir: &Path, text: &str) -> io::Result<String> {
    let mut scratch = tempfile::Builder::new()
        .prefix("elomatic_edit")
        .suffix(".txt")
        .tempfile_in(dir)?;
    scratch.write_all(text.as_bytes())?;
    scratch.flush()?;

    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(words)
        .arg(scratch.path())
        .status()
        .map_err(|e| io::Error::new(e.kind(), format!("failed to launch editor \"{editor}\": {e}")))?;
    if !status.success() {
        return Err(io::Error::other(format!("editor \"{editor}\" exited with {status}")));
    }

    // Editors may replace the file rather than write in place, so read by path.
    std::fs::read_to_string(scratch.path())
}
