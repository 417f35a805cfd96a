//! Command-line argument parsing for the MentalMuse CLI.
//!
//! The first argument after the program name selects the command. Options
//! (`--board`, `--mood`, `--email`, `--nickname`, `--remote`) may appear
//! anywhere after it; the remaining words are positional, and trailing
//! words of free text are joined with spaces so quoting is optional.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::community::Board;
use crate::session::Route;

/// Which community feed a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedTarget {
    /// A board kept in local storage
    Local(Board),
    /// The API server's feed
    Remote,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Run the API server
    Serve,
    /// Show session state and where the gate sends the user
    Status,
    /// Show which route renders for a requested route
    Route { route: Route },
    /// Breathing warm-up and questions; answers may be given up front
    Onboard { answers: Vec<String> },
    /// Sign in anonymously, or by email when `--email` is given
    Login { email: Option<String> },
    Register { email: String, nickname: Option<String> },
    Logout,
    Quests,
    /// Save a quest journal draft
    Journal { quest_id: String, text: String },
    /// Complete a quest, using the saved draft when no text is given
    Complete { quest_id: String, text: Option<String> },
    Progress,
    Post {
        target: FeedTarget,
        mood: Option<String>,
        message: String,
    },
    Feed { target: FeedTarget },
    Like { target: FeedTarget, post_id: String },
    Comment {
        target: FeedTarget,
        post_id: String,
        text: String,
    },
    Reply {
        target: FeedTarget,
        post_id: String,
        comment_id: String,
        text: String,
    },
    Recommend { mood: String },
    /// Log a mood, optionally with text (also shared to the community)
    Mood { mood: String, text: Option<String> },
    Moods,
    /// Record a vent from an audio file standing in for the microphone
    Vent { file: PathBuf, mood: Option<String> },
    Vents,
    VentNotes { id: String, notes: String },
    VentDelete { id: String },
    /// Send an audio file to the analysis endpoint
    Analyze { file: PathBuf },
    Version,
    Help,
    /// Unrecognized input, with the reason
    Invalid(String),
}

const VALUE_OPTIONS: [&str; 4] = ["--board", "--mood", "--email", "--nickname"];
const FLAG_OPTIONS: [&str; 1] = ["--remote"];

struct Parsed {
    positionals: Vec<String>,
    options: HashMap<&'static str, String>,
    flags: Vec<&'static str>,
}

impl Parsed {
    fn option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(&name)
    }

    /// Positional at `index`, or an error naming it.
    fn required(&self, index: usize, name: &str) -> Result<String, String> {
        self.positionals
            .get(index)
            .cloned()
            .ok_or_else(|| format!("missing <{}>", name))
    }

    /// All positionals from `index` on, joined with spaces.
    fn rest(&self, index: usize) -> Option<String> {
        let words = self.positionals.get(index..)?;
        if words.is_empty() {
            return None;
        }
        Some(words.join(" "))
    }

    fn target(&self) -> Result<FeedTarget, String> {
        if self.has_flag("--remote") {
            return Ok(FeedTarget::Remote);
        }
        match self.option("--board") {
            Some(board) => board.parse().map(FeedTarget::Local),
            None => Ok(FeedTarget::Local(Board::Community)),
        }
    }
}

fn split<I>(mut args: I) -> Result<Parsed, String>
where
    I: Iterator<Item = String>,
{
    let mut parsed = Parsed {
        positionals: Vec::new(),
        options: HashMap::new(),
        flags: Vec::new(),
    };
    while let Some(arg) = args.next() {
        if let Some(name) = VALUE_OPTIONS.iter().find(|o| **o == arg) {
            let value = args
                .next()
                .ok_or_else(|| format!("{} needs a value", name))?;
            parsed.options.insert(*name, value);
        } else if let Some(name) = FLAG_OPTIONS.iter().find(|o| **o == arg) {
            parsed.flags.push(*name);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option {}", arg));
        } else {
            parsed.positionals.push(arg);
        }
    }
    Ok(parsed)
}

/// Parse command-line arguments and return the command to run.
///
/// # Examples
///
/// ```
/// use mentalmuse::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["mentalmuse".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1);
    let Some(command) = args.next() else {
        return CliCommand::Help;
    };

    match command.as_str() {
        "--version" | "-V" | "version" => return CliCommand::Version,
        "--help" | "-h" | "help" => return CliCommand::Help,
        _ => {}
    }

    match split(args).and_then(|parsed| build(&command, parsed)) {
        Ok(cmd) => cmd,
        Err(reason) => CliCommand::Invalid(format!("{}: {}", command, reason)),
    }
}

fn build(command: &str, p: Parsed) -> Result<CliCommand, String> {
    let cmd = match command {
        "serve" => CliCommand::Serve,
        "status" => CliCommand::Status,
        "route" => CliCommand::Route {
            route: p.required(0, "route")?.parse()?,
        },
        "onboard" => CliCommand::Onboard {
            answers: p.positionals,
        },
        "login" => CliCommand::Login {
            email: p.option("--email"),
        },
        "register" => CliCommand::Register {
            email: p.option("--email").ok_or("missing --email")?,
            nickname: p.option("--nickname"),
        },
        "logout" => CliCommand::Logout,
        "quests" => CliCommand::Quests,
        "journal" => CliCommand::Journal {
            quest_id: p.required(0, "quest-id")?,
            text: p.rest(1).ok_or("missing <text>")?,
        },
        "complete" => CliCommand::Complete {
            quest_id: p.required(0, "quest-id")?,
            text: p.rest(1),
        },
        "progress" => CliCommand::Progress,
        "post" => CliCommand::Post {
            target: p.target()?,
            mood: p.option("--mood"),
            message: p.rest(0).ok_or("missing <message>")?,
        },
        "feed" => CliCommand::Feed {
            target: p.target()?,
        },
        "like" => CliCommand::Like {
            target: p.target()?,
            post_id: p.required(0, "post-id")?,
        },
        "comment" => CliCommand::Comment {
            target: p.target()?,
            post_id: p.required(0, "post-id")?,
            text: p.rest(1).ok_or("missing <text>")?,
        },
        "reply" => CliCommand::Reply {
            target: p.target()?,
            post_id: p.required(0, "post-id")?,
            comment_id: p.required(1, "comment-id")?,
            text: p.rest(2).ok_or("missing <text>")?,
        },
        "recommend" => CliCommand::Recommend {
            mood: p.rest(0).ok_or("missing <mood>")?,
        },
        "mood" => CliCommand::Mood {
            mood: p.required(0, "mood")?,
            text: p.rest(1),
        },
        "moods" => CliCommand::Moods,
        "vent" => CliCommand::Vent {
            file: PathBuf::from(p.required(0, "file")?),
            mood: p.option("--mood"),
        },
        "vents" => CliCommand::Vents,
        "vent-notes" => CliCommand::VentNotes {
            id: p.required(0, "id")?,
            notes: p.rest(1).unwrap_or_default(),
        },
        "vent-delete" => CliCommand::VentDelete {
            id: p.required(0, "id")?,
        },
        "analyze" => CliCommand::Analyze {
            file: PathBuf::from(p.required(0, "file")?),
        },
        _ => return Err("unknown command".to_string()),
    };
    Ok(cmd)
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: mentalmuse <command> [options]

Session:
  status                         Show session state
  route <name>                   Show where a route leads
  onboard [answers...]           Breathing warm-up and questions
  login [--email E]              Sign in (anonymous without --email)
  register --email E [--nickname N]
  logout

Quests:
  quests                         List quests
  journal <id> <text>            Save a quest journal draft
  complete <id> [text]           Complete a quest
  progress                       Level, XP, streak and badges

Community (--board community|acceptance-therapy, or --remote):
  post [--mood M] <message>
  feed
  like <post-id>
  comment <post-id> <text>
  reply <post-id> <comment-id> <text>

Journals:
  recommend <mood>               Activities for a mood
  mood <mood> [text]             Log a mood
  moods                          List logged moods
  vent <file> [--mood M]         Record a vent from an audio file
  vents                          List vent recordings
  vent-notes <id> [notes]        Set or clear notes
  vent-delete <id>
  analyze <file>                 Analyze a recording on the server

Server:
  serve                          Run the API server

  -V, --version
  -h, --help";
