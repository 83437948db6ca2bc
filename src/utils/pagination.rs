use crate::utils::error::{AppError, AppResult};
use crossterm::terminal::size;
use std::io::{ErrorKind, IsTerminal, Write};
use tracing::debug;

/// Get terminal size (rows, columns)
pub fn get_terminal_size() -> AppResult<(u16, u16)> {
    size()
        .map(|(width, height)| (height, width))
        .map_err(|e| AppError::System(format!("Failed to get terminal size: {}", e)))
}

/// Check if content should be paginated based on terminal height
pub fn should_paginate(content: &str, terminal_height: u16) -> bool {
    let line_count = content.lines().count();
    // Use pagination if content exceeds 2/3 of terminal height
    line_count > usize::from(terminal_height) * 2 / 3
}

/// Display content using minus pager for static content
pub fn paginate_static_content(content: &str) -> AppResult<()> {
    let pager = minus::Pager::new();
    pager
        .push_str(content)
        .map_err(|e| AppError::System(format!("Failed to push content to pager: {}", e)))?;

    if let Err(e) = minus::page_all(pager) {
        // Quitting the pager early is not an error
        if e.to_string().to_lowercase().contains("abort") {
            return Ok(());
        }
        return Err(AppError::System(format!("Failed to run pager: {}", e)));
    }

    Ok(())
}

/// Print rendered output, through the pager when it is long and stdout is a terminal
pub fn emit(content: &str, use_pager: bool) -> AppResult<()> {
    if use_pager && std::io::stdout().is_terminal() {
        let (rows, _) = get_terminal_size()?;
        if should_paginate(content, rows) {
            debug!(lines = content.lines().count(), rows, "paging output");
            return paginate_static_content(content);
        }
    }

    write_content(&mut std::io::stdout().lock(), content)
}

/// Write content with a trailing newline. A closed reader ends output quietly.
pub fn write_content<W: Write>(out: &mut W, content: &str) -> AppResult<()> {
    let result = write!(out, "{}", content)
        .and_then(|_| {
            if content.ends_with('\n') {
                Ok(())
            } else {
                writeln!(out)
            }
        })
        .and_then(|_| out.flush());

    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("output reader closed");
            Ok(())
        }
        other => other.map_err(|e| AppError::Io(format!("Failed to write output: {}", e))),
    }
}
