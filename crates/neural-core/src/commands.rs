pub const COMMAND_PREFIX: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Projects,
    Skills,
    About,
    Portfolio,
    Help,
    Clear,
    Matrix,
    Hack,
    Status,
    Restart,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        CommandRegistry::get(self).name
    }

    /// Matches an already normalized (trimmed, lower-cased) command string.
    pub fn from_normalized(cmd: &str) -> Option<Self> {
        COMMAND_SPECS
            .iter()
            .find(|spec| spec.name == cmd)
            .map(|spec| spec.command)
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Outcome of matching a submitted line against the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Known(Command),
    /// Prefixed but unknown; carries the normalized command.
    NotFound(String),
    /// Missing the prefix; carries the raw input.
    InvalidSyntax(String),
}

pub fn classify(raw: &str) -> Dispatch {
    let cmd = normalize(raw);
    match Command::from_normalized(&cmd) {
        Some(command) => Dispatch::Known(command),
        None if cmd.starts_with(COMMAND_PREFIX) => Dispatch::NotFound(cmd),
        None => Dispatch::InvalidSyntax(raw.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    /// Status text typed out before the command's output. `None` for
    /// commands that reset the buffer instead.
    pub reveal: Option<&'static str>,
}

pub struct CommandRegistry;

const COMMAND_SPECS: [CommandSpec; 10] = [
    CommandSpec {
        command: Command::Projects,
        name: "/projects",
        reveal: Some("ACCESSING PROJECT_FILES.DIR..."),
    },
    CommandSpec {
        command: Command::Skills,
        name: "/skills",
        reveal: Some("LOADING SKILL_MATRIX.DB..."),
    },
    CommandSpec {
        command: Command::About,
        name: "/about",
        reveal: Some("ACCESSING SYSTEM_INFO.DAT..."),
    },
    CommandSpec {
        command: Command::Portfolio,
        name: "/portfolio",
        reveal: Some("LOADING COMPLETE PORTFOLIO INTERFACE..."),
    },
    CommandSpec {
        command: Command::Help,
        name: "/help",
        reveal: Some("DISPLAYING COMMAND REFERENCE..."),
    },
    CommandSpec {
        command: Command::Clear,
        name: "/clear",
        reveal: None,
    },
    CommandSpec {
        command: Command::Matrix,
        name: "/matrix",
        reveal: Some("INITIALIZING MATRIX SIMULATION..."),
    },
    CommandSpec {
        command: Command::Hack,
        name: "/hack",
        reveal: Some("INITIATING HACK SEQUENCE..."),
    },
    CommandSpec {
        command: Command::Status,
        name: "/status",
        reveal: Some("RETRIEVING SYSTEM STATUS..."),
    },
    CommandSpec {
        command: Command::Restart,
        name: "/restart",
        reveal: None,
    },
];

impl CommandRegistry {
    pub fn list() -> &'static [CommandSpec] {
        &COMMAND_SPECS
    }

    pub fn get(command: Command) -> &'static CommandSpec {
        match command {
            Command::Projects => &COMMAND_SPECS[0],
            Command::Skills => &COMMAND_SPECS[1],
            Command::About => &COMMAND_SPECS[2],
            Command::Portfolio => &COMMAND_SPECS[3],
            Command::Help => &COMMAND_SPECS[4],
            Command::Clear => &COMMAND_SPECS[5],
            Command::Matrix => &COMMAND_SPECS[6],
            Command::Hack => &COMMAND_SPECS[7],
            Command::Status => &COMMAND_SPECS[8],
            Command::Restart => &COMMAND_SPECS[9],
        }
    }
}

pub const BANNER_RULE_TOP: &str =
    "╔══════════════════════════════════════════════════════════════╗";
pub const BANNER_RULE_BOTTOM: &str =
    "╚══════════════════════════════════════════════════════════════╝";

pub const BOOT_SEQUENCE: [&str; 21] = [
    BANNER_RULE_TOP,
    "║                    NEURAL HACKER PORTFOLIO                   ║",
    "║                      Command Interface                       ║",
    BANNER_RULE_BOTTOM,
    "",
    "Welcome to the Neural Network Portfolio System",
    "Type commands to navigate:",
    "",
    "📁 /projects    - View project files and executables",
    "🧠 /skills     - Access skill matrix database",
    "👤 /about      - Display system information",
    "📋 /portfolio  - Complete portfolio overview",
    "❓ /help       - Show all available commands",
    "🧹 /clear      - Clear terminal screen",
    "",
    "🎮 BONUS COMMANDS:",
    "🔢 /matrix     - Run matrix simulation",
    "🔓 /hack       - Execute hacking sequence",
    "",
    "💡 TIP: Use /portfolio for a complete overview or explore individual sections",
    "Type a command to begin exploration...",
];

pub const HELP_REFERENCE: [&str; 14] = [
    "📁 /projects    - View project files and executables",
    "🧠 /skills     - Access skill matrix database",
    "👤 /about      - Display system information",
    "📋 /portfolio  - Complete portfolio overview",
    "🧹 /clear      - Clear terminal screen",
    "❓ /help       - Show this command reference",
    "",
    "🎮 BONUS COMMANDS:",
    "🔢 /matrix     - Run matrix simulation",
    "🔓 /hack       - Execute hacking simulation",
    "🌐 /status     - Show system status",
    "🔄 /restart    - Restart the terminal system",
    "",
    "💡 TIP: Commands are case-insensitive and must start with /",
];

pub const STATUS_REPORT: [&str; 6] = [
    "🖥️  CPU USAGE: 98%",
    "💾 MEMORY: 15.7GB / 16GB",
    "🌐 NETWORK: CONNECTED",
    "🔒 SECURITY: MAXIMUM",
    "⚡ POWER: OPTIMAL",
    "🎯 MISSION: PORTFOLIO_DISPLAY",
];

pub const MATRIX_ROWS: [&str; 5] = [
    "01001001 11010110 00110101 10101010 01110011",
    "11100011 00101101 11010010 01001110 10110100",
    "00110110 10101111 01001001 11010110 00110101",
    "10101010 01110011 11100011 00101101 11010010",
    "01001110 10110100 00110110 10101111 01001001",
];

pub const HACK_STEPS: [&str; 6] = [
    "Scanning network topology...",
    "Bypassing firewall protocols...",
    "Injecting payload...",
    "Escalating privileges...",
    "Decrypting secure channels...",
    "ACCESS GRANTED",
];

/// Skill categories in listing order. Categories without skills are skipped
/// but still occupy their stagger slot.
pub const SKILL_CATEGORIES: [&str; 5] = ["languages", "frameworks", "backend", "frontend", "tools"];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_lookup_matches_list_position() {
        for spec in CommandRegistry::list() {
            assert_eq!(CommandRegistry::get(spec.command), spec);
        }
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        let lookup = |raw: &str| Command::from_normalized(&normalize(raw));
        assert_eq!(lookup("  /PROJECTS \t"), Some(Command::Projects));
        assert_eq!(lookup("/Status"), Some(Command::Status));
    }

    #[test]
    fn lookup_requires_exact_match() {
        assert_eq!(Command::from_normalized("/project"), None);
        assert_eq!(Command::from_normalized("/help me"), None);
        assert_eq!(Command::from_normalized("help"), None);
    }

    #[test]
    fn classify_separates_unknown_from_unprefixed() {
        assert_eq!(classify(" /HELP "), Dispatch::Known(Command::Help));
        assert_eq!(
            classify("/DoesNotExist"),
            Dispatch::NotFound("/doesnotexist".to_string())
        );
        assert_eq!(
            classify("Hello"),
            Dispatch::InvalidSyntax("Hello".to_string())
        );
        assert_eq!(classify("/"), Dispatch::NotFound("/".to_string()));
    }

    #[test]
    fn only_reset_commands_skip_the_reveal() {
        let without_reveal: Vec<&'static str> = CommandRegistry::list()
            .iter()
            .filter(|spec| spec.reveal.is_none())
            .map(|spec| spec.name)
            .collect();
        assert_eq!(without_reveal, vec!["/clear", "/restart"]);
    }
}
