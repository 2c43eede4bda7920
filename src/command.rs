// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Command arguments.
//!
//! Every builder in [`crate::search`] renders to a flat, ordered list of
//! [`Arg`]s. A [`SearchCommand`] pairs that list with the command name and is
//! what gets handed to the transport.
//!
//! ```
//! use ftsearch::{Arg, SearchCommand};
//!
//! let cmd = SearchCommand::new("FT.DROPINDEX", vec![Arg::from("idx:users"), Arg::from("DD")]);
//! assert_eq!(cmd.to_string(), "FT.DROPINDEX idx:users DD");
//! ```

use std::fmt;

use redis::{RedisWrite, ToRedisArgs};

/// A single positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Arg {
    /// The argument as it goes over the wire.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            // f64's Display is the shortest round-trippable form: 1.0 -> "1", 2.5 -> "2.5"
            Arg::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Int(i)
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Int(i64::from(i))
    }
}

impl From<u64> for Arg {
    fn from(i: u64) -> Self {
        // Counts and TTLs never get near i64::MAX
        Arg::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Arg {
    fn from(i: usize) -> Self {
        Arg::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl ToRedisArgs for Arg {
    fn write_redis_args<W>(&self, out: &mut W)
    where
        W: ?Sized + RedisWrite,
    {
        match self {
            Arg::Str(s) => out.write_arg(s.as_bytes()),
            other => out.write_arg(other.render().as_bytes()),
        }
    }
}

/// Append `NAME n v1..vn` to `args`, or nothing when `values` is empty.
pub(crate) fn push_counted(args: &mut Vec<Arg>, name: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    args.push(name.into());
    args.push(values.len().into());
    args.extend(values.iter().map(Arg::from));
}

/// A fully rendered FT.* command, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCommand {
    name: &'static str,
    args: Vec<Arg>,
}

impl SearchCommand {
    pub fn new(name: &'static str, args: Vec<Arg>) -> Self {
        Self { name, args }
    }

    /// Command name, e.g. `FT.SEARCH`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Arguments following the command name.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Name followed by every argument, each rendered as a string.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.name.to_string())
            .chain(self.args.iter().map(Arg::render))
            .collect()
    }

    /// Build the redis-rs command for this invocation.
    pub fn to_cmd(&self) -> redis::Cmd {
        let mut cmd = redis::cmd(self.name);
        for arg in &self.args {
            cmd.arg(arg);
        }
        cmd
    }
}

/// Space-joined tokens. No quoting is applied, so the output is not
/// necessarily pasteable into redis-cli.
impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_rendering() {
        assert_eq!(Arg::from("TEXT").render(), "TEXT");
        assert_eq!(Arg::from(3usize).render(), "3");
        assert_eq!(Arg::from(-7i32).render(), "-7");
        assert_eq!(Arg::from(1.0).render(), "1");
        assert_eq!(Arg::from(0.25).render(), "0.25");
    }

    #[test]
    fn test_push_counted_skips_empty() {
        let mut args = Vec::new();
        push_counted(&mut args, "RETURN", &[]);
        assert!(args.is_empty());

        push_counted(&mut args, "RETURN", &["a".to_string(), "b".to_string()]);
        let rendered: Vec<String> = args.iter().map(Arg::render).collect();
        assert_eq!(rendered, vec!["RETURN", "2", "a", "b"]);
    }

    #[test]
    fn test_command_display_and_tokens() {
        let cmd = SearchCommand::new("FT.SEARCH", vec!["idx".into(), "hello".into(), "SLOP".into(), 2i32.into()]);
        assert_eq!(cmd.name(), "FT.SEARCH");
        assert_eq!(cmd.args().len(), 4);
        assert_eq!(cmd.to_string(), "FT.SEARCH idx hello SLOP 2");
        assert_eq!(cmd.tokens(), vec!["FT.SEARCH", "idx", "hello", "SLOP", "2"]);
    }

    #[test]
    fn test_to_cmd_packs_every_arg() {
        let cmd = SearchCommand::new("FT.DROPINDEX", vec!["test".into(), "DD".into()]);
        let packed = cmd.to_cmd().get_packed_command();
        let text = String::from_utf8(packed).unwrap();
        assert!(text.starts_with("*3\r\n"));
        assert!(text.contains("FT.DROPINDEX"));
        assert!(text.contains("DD"));
    }
}
