// Dweve Rulebench - Rule Ordering Benchmark Dashboard
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion scripts and their installation notes.

use crate::error::{CliError, Result};
use clap::Command;
use clap_complete::{generate, Generator};
use std::io::{self, Write};

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(generator, cmd, name, &mut stdout);
    stdout.flush().map_err(CliError::output)
}

/// How to enable completions for `shell`, or `"Unsupported shell"`.
pub fn installation_instructions(shell: &str) -> String {
    let (session, persistent) = match shell.to_lowercase().as_str() {
        "bash" => (
            r#"eval "$(rulebench completion bash)""#,
            "rulebench completion bash > ~/.local/share/bash-completion/completions/rulebench",
        ),
        "zsh" => (
            r#"eval "$(rulebench completion zsh)""#,
            "rulebench completion zsh > ~/.zsh/completions/_rulebench  # directory must be in $fpath",
        ),
        "fish" => (
            "rulebench completion fish | source",
            "rulebench completion fish > ~/.config/fish/completions/rulebench.fish",
        ),
        "powershell" | "pwsh" => (
            "rulebench completion powershell | Out-String | Invoke-Expression",
            "Add the line above to the file named by $PROFILE",
        ),
        "elvish" => (
            "eval (rulebench completion elvish | slurp)",
            "Add the line above to ~/.config/elvish/rc.elv",
        ),
        _ => return "Unsupported shell".to_string(),
    };
    format!(
        "# {} completion\n\n# Current session:\n{}\n\n# Persistent:\n{}\n",
        shell.to_lowercase(),
        session,
        persistent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_name_the_shell() {
        for shell in ["bash", "zsh", "fish", "elvish"] {
            let text = installation_instructions(shell);
            assert!(text.contains(&format!("rulebench completion {}", shell)), "{}", shell);
        }
    }

    #[test]
    fn test_pwsh_alias() {
        assert_eq!(
            installation_instructions("pwsh"),
            installation_instructions("powershell").replace("# powershell", "# pwsh")
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert!(installation_instructions("BASH").contains("# bash completion"));
    }

    #[test]
    fn test_unsupported_shell() {
        assert_eq!(installation_instructions("tcsh"), "Unsupported shell");
    }
}
