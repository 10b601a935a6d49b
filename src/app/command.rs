#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Reset,
    Quit,
    Input(String),
    Noop,
}

/// Lines starting with `:` are navigation commands; anything else is
/// content for the current step.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    match line {
        "" => Command::Noop,
        ":next" | ":n" => Command::Next,
        ":back" | ":b" => Command::Back,
        ":reset" => Command::Reset,
        ":quit" | ":q" => Command::Quit,
        _ => Command::Input(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_commands_and_content() {
        assert_eq!(parse_line(" :next "), Command::Next);
        assert_eq!(parse_line(":b"), Command::Back);
        assert_eq!(parse_line(""), Command::Noop);
        assert_eq!(parse_line("Ada Lovelace"), Command::Input("Ada Lovelace".to_string()));
        assert_eq!(parse_line(":nope"), Command::Input(":nope".to_string()));
    }
}
