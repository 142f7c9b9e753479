use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::Context;

/// Copy `password` to the system clipboard. If `clear_after` is non-zero, wait that long and then
/// empty the clipboard again.
pub(crate) fn copy_password(password: &str, clear_after: Duration) -> anyhow::Result<()> {
    send_to_clipboard(password.as_bytes())?;
    eprintln!("Copied to the clipboard.");
    if !clear_after.is_zero() {
        eprintln!(
            "The clipboard will be cleared in {} seconds.",
            clear_after.as_secs()
        );
        thread::sleep(clear_after);
        send_to_clipboard(b"")?;
        eprintln!("Clipboard cleared.");
    }
    Ok(())
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut cmd = clipboard_cmd();
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start the clipboard program (`{program}`)"))?;
    child
        .stdin
        .take()
        .context("the clipboard program's stdin was not captured")?
        .write_all(data)
        .with_context(|| format!("failed to write to the clipboard program (`{program}`)"))?;
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for the clipboard program (`{program}`)"))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "the clipboard program (`{program}`) exited with {exit_status}"
        ))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
