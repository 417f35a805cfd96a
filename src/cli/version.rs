//! Version and help output.

use super::args::USAGE;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("mentalmuse {}", VERSION)
}

pub fn help_text() -> String {
    format!("{}\n\n{}", version_line(), USAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("mentalmuse "));
    }

    #[test]
    fn test_help_lists_commands() {
        let help = help_text();
        for command in ["serve", "onboard", "complete", "feed", "vent", "analyze"] {
            assert!(help.contains(command), "missing {}", command);
        }
    }
}
