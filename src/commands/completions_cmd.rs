use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::commands::base_commands::CliArgs;

pub fn completions_command<W: Write>(shell: Shell, out: &mut W) {
    let mut command = CliArgs::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_command_writes_bash_script() {
        let mut buffer = Vec::new();
        completions_command(Shell::Bash, &mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("overbooking"));
        assert!(script.contains("roi"));
    }
}
