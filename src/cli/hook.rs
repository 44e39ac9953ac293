//! Hook command.
//!
//! Prints a shell function that evaluates `hush load` in the current shell.
//! A missing encrypted file prints a skip notice and returns success; any
//! other failure returns non-zero without touching the environment.

use crate::cli::{output, Shell};
use crate::error::{Result, EXIT_NOT_FOUND};

/// Print the wrapper function for `shell`.
pub fn execute(shell: Shell) -> Result<()> {
    output::raw(&script(shell))?;
    Ok(())
}

/// Wrapper source for `shell`.
pub fn script(shell: Shell) -> String {
    match shell {
        Shell::Bash | Shell::Zsh => format!(
            r#"hush_load() {{
  local __hush_out
  __hush_out="$(command hush load --shell posix "$@")"
  case $? in
    0) eval "$__hush_out" ;;
    {code}) echo "hush: no encrypted env file here, skipping" >&2 ;;
    *) return 1 ;;
  esac
}}
"#,
            code = EXIT_NOT_FOUND
        ),
        Shell::Fish => format!(
            r#"function hush-load
    set -l __hush_out (command hush load --shell fish $argv)
    switch $status
        case 0
            string join \n -- $__hush_out | source
        case {code}
            echo "hush: no encrypted env file here, skipping" >&2
        case '*'
            return 1
    end
end
"#,
            code = EXIT_NOT_FOUND
        ),
        Shell::PowerShell => format!(
            r#"function Invoke-HushLoad {{
    $hushOut = & hush load --shell power-shell @args
    switch ($LASTEXITCODE) {{
        0 {{ if ($hushOut) {{ Invoke-Expression ($hushOut -join "`n") }} }}
        {code} {{ Write-Warning "hush: no encrypted env file here, skipping" }}
        default {{ throw "hush load failed" }}
    }}
}}
"#,
            code = EXIT_NOT_FOUND
        ),
    }
}
