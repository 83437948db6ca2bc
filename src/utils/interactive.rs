use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::Command;

pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Prompt with a pre-filled value; an empty answer keeps it
pub fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    let shown = if default.is_empty() {
        format!("{}: ", prompt)
    } else {
        format!("{} [{}]: ", prompt, default)
    };
    let input = prompt_input(&shown)?;
    Ok(if input.is_empty() {
        default.to_string()
    } else {
        input
    })
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_input(&format!("{} [y/N]: ", prompt))?;
        match parse_yes_no(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' or 'n'"),
        }
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" | "s" | "sim" => Some(true),
        "n" | "no" | "nao" | "não" | "" => Some(false),
        _ => None,
    }
}

/// Pick an editor: explicit choice, then `$EDITOR`, then whatever is installed
pub fn detect_editor(editor_cmd: Option<&str>) -> String {
    editor_cmd
        .map(|s| s.to_string())
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else if std::path::Path::new("/usr/bin/nvim").exists() {
                "nvim".to_string()
            } else if std::path::Path::new("/usr/bin/vim").exists() {
                "vim".to_string()
            } else if std::path::Path::new("/usr/bin/nano").exists() {
                "nano".to_string()
            } else {
                "vi".to_string()
            }
        })
}

/// Open a file in place with the configured editor
pub fn edit_file_direct(file_path: &std::path::Path, editor_cmd: Option<&str>) -> Result<()> {
    let editor = detect_editor(editor_cmd);

    let status = Command::new(&editor)
        .arg(file_path)
        .status()
        .with_context(|| format!("Failed to execute editor: {}", editor))?;

    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with non-zero status"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no_accepts_both_languages() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("sim"), Some(true));
        assert_eq!(parse_yes_no(""), Some(false));
        assert_eq!(parse_yes_no("não"), Some(false));
        assert_eq!(parse_yes_no("talvez"), None);
    }

    #[test]
    fn test_explicit_editor_wins() {
        assert_eq!(detect_editor(Some("hx")), "hx");
    }
}
