//! Console text printed around each invocation

use super::Pid;

/// Width of the separator rule
pub const SEPARATOR_WIDTH: usize = 40;

/// Character the separator rule is drawn with
pub const RULE_CHAR: char = '=';

/// Shown while waiting for the operator after the last invocation
pub const ACK_PROMPT: &str = "Press Enter to continue . . .";

pub fn separator() -> String {
    RULE_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}

/// Blank line, rule, header, rule. Ends with a newline.
pub fn banner(label: &str, pid: Pid) -> String {
    let rule = separator();
    format!("\n{rule}\nTesting {label} PID: {pid}\n{rule}\n")
}

pub fn completion(label: &str) -> String {
    format!("All {label} processes tested!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_width() {
        assert_eq!(separator(), "========================================");
    }

    #[test]
    fn test_banner_layout() {
        let pid = Pid::new(100).unwrap();
        let text = banner("Firefox", pid);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "",
                "========================================",
                "Testing Firefox PID: 100",
                "========================================",
                "",
            ]
        );
    }

    #[test]
    fn test_completion_uses_label() {
        assert_eq!(completion("Firefox"), "All Firefox processes tested!");
        assert_eq!(completion("Chrome"), "All Chrome processes tested!");
    }
}
