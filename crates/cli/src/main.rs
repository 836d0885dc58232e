//! idprep - prepare, enforce, and compare protocol identifier strings from
//! the command line.
//!
//! Reads the operand strings from arguments, or from stdin when omitted,
//! and prints the prepared/enforced form or the comparison verdict.

use std::cmp::Ordering;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use idprep_core::{
    IDN, NICKNAME, OPAQUE_STRING, PrecisProfile, USERNAME_CASE_MAPPED, USERNAME_CASE_PRESERVED,
    XMPP_LOCALPART,
};

/// Which preconfigured profile to run the strings through.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ProfileName {
    /// UsernameCaseMapped (RFC 8265)
    #[default]
    UsernameCaseMapped,
    /// UsernameCasePreserved (RFC 8265)
    UsernameCasePreserved,
    /// OpaqueString, for passwords (RFC 8265)
    OpaqueString,
    /// Nickname (RFC 8266)
    Nickname,
    /// Domain labels (RFC 5895)
    Idn,
    /// XMPP localpart (RFC 7622)
    XmppLocalpart,
}

impl ProfileName {
    fn profile(self) -> &'static dyn PrecisProfile {
        match self {
            ProfileName::UsernameCaseMapped => &USERNAME_CASE_MAPPED,
            ProfileName::UsernameCasePreserved => &USERNAME_CASE_PRESERVED,
            ProfileName::OpaqueString => &OPAQUE_STRING,
            ProfileName::Nickname => &NICKNAME,
            ProfileName::Idn => &IDN,
            ProfileName::XmppLocalpart => &XMPP_LOCALPART,
        }
    }
}

/// Prepare, enforce, and compare internationalized identifier strings.
#[derive(Parser, Debug)]
#[command(name = "idprep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Profile to apply
    #[arg(short, long, value_enum, default_value_t = ProfileName::default())]
    profile: ProfileName,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that every code point is allowed by the profile's string class
    Prepare {
        /// String to check; read from stdin when omitted
        text: Option<String>,
    },
    /// Apply all profile rules, printing the canonical string
    Enforce {
        /// String to canonicalize; read from stdin when omitted
        text: Option<String>,
    },
    /// Compare two strings under the profile's comparison rules
    Compare { left: String, right: String },
}

fn read_operand(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            // A trailing newline is an artifact of line-based input, not
            // part of the identifier.
            Ok(buffer
                .strip_suffix('\n')
                .map(str::to_owned)
                .unwrap_or(buffer))
        }
    }
}

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let profile = args.profile.profile();
    match args.command {
        Command::Prepare { text } => Ok(profile.prepare(&read_operand(text)?)?),
        Command::Enforce { text } => Ok(profile.enforce(&read_operand(text)?)?),
        Command::Compare { left, right } => Ok(match profile.compare(&left, &right)? {
            Ordering::Less => "less".to_owned(),
            Ordering::Equal => "equal".to_owned(),
            Ordering::Greater => "greater".to_owned(),
        }),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("idprep: {err}");
            ExitCode::FAILURE
        }
    }
}
