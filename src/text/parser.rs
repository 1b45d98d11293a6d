//! Line-oriented parser for configuration text.

use std::mem;

use tracing::{debug, trace, warn};

use crate::error::{ParseError, ParseErrorKind, Result};
use crate::model::element::Header;
use crate::model::{Comment, Configuration, Section, Setting};
use crate::options::ParseOptions;
use crate::options::defaults::CONTINUATION_MARKER;

/// Parses configuration text into a fresh [`Configuration`].
///
/// Parsing is all-or-nothing: the first malformed line aborts the parse
/// and nothing is returned but the error.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] with the 1-based line number of the
/// offending line.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Configuration> {
    Parser::new(options).run(source)
}

/// Represents an on-going parse.
#[derive(Debug)]
struct Parser<'o> {
    options: &'o ParseOptions,
    config: Configuration,
    /// Comment lines waiting for the next section or setting.
    pre_comments: Vec<Comment>,
    line: usize,
}

impl<'o> Parser<'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            config: Configuration::new(),
            pre_comments: Vec::new(),
            line: 0,
        }
    }

    fn run(mut self, source: &str) -> Result<Configuration> {
        debug!(bytes = source.len(), "Parsing configuration text");

        for raw_line in split_lines(source) {
            self.line += 1;
            self.parse_line(raw_line.trim())?;
        }

        if !self.pre_comments.is_empty() {
            warn!(
                count = self.pre_comments.len(),
                "Dropping comments that follow the last element"
            );
        }

        debug!(
            sections = self.config.len(),
            lines = self.line,
            "Parsed configuration text"
        );

        Ok(self.config)
    }

    const fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line, kind)
    }

    fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        if let Some(rest) = line.strip_prefix(CONTINUATION_MARKER) {
            return self.continue_setting(rest);
        }

        if line.is_empty() {
            return Ok(());
        }

        let (content, comment) = match find_comment(line, self.options) {
            Some((0, symbol)) => {
                if !self.options.pre_comments_ignored() {
                    let text = line[symbol.len_utf8()..].trim();
                    self.pre_comments.push(Comment::from_parts(symbol, text));
                }
                return Ok(());
            }
            Some((index, symbol)) if !self.options.inline_comments_ignored() => {
                let text = line[index + symbol.len_utf8()..].trim();
                (
                    line[..index].trim(),
                    Some(Comment::from_parts(symbol, text)),
                )
            }
            _ => (line, None),
        };

        if content.starts_with('[') {
            self.parse_section(content, comment)
        } else {
            self.parse_setting(content, comment)
        }
    }

    fn continue_setting(&mut self, text: &str) -> Result<(), ParseError> {
        let Some(setting) = self
            .config
            .last_section_mut()
            .and_then(Section::last_setting_mut)
        else {
            return Err(self.error(ParseErrorKind::ContinuationWithoutSetting));
        };

        setting.append_line(text);
        Ok(())
    }

    fn parse_section(&mut self, content: &str, comment: Option<Comment>) -> Result<(), ParseError> {
        let Some(close) = content.find(']') else {
            return Err(self.error(ParseErrorKind::MissingClosingBracket));
        };

        if close != content.len() - 1 {
            let token = content[close + 1..].to_owned();
            return Err(self.error(ParseErrorKind::UnexpectedToken(token)));
        }

        let name = content[1..close].trim();

        if name.is_empty() {
            return Err(self.error(ParseErrorKind::SectionNameExpected));
        }

        if self.config.contains(name) {
            return Err(self.error(ParseErrorKind::DuplicateSection(name.to_owned())));
        }

        trace!(line = self.line, section = name, "Section");

        let header = self.take_header(name, comment);
        self.config.push_unchecked(Section::from_header(header));
        Ok(())
    }

    fn parse_setting(&mut self, content: &str, comment: Option<Comment>) -> Result<(), ParseError> {
        let Some(assign) = content.find('=') else {
            return Err(self.error(ParseErrorKind::AssignmentExpected));
        };

        let name = content[..assign].trim();
        let value = content[assign + 1..].trim();

        if name.is_empty() {
            return Err(self.error(ParseErrorKind::SettingNameExpected));
        }

        let line = self.line;
        let Some(section) = self.config.last_section_mut() else {
            return Err(ParseError::new(
                line,
                ParseErrorKind::SettingOutsideSection(name.to_owned()),
            ));
        };

        if section.contains(name) {
            return Err(ParseError::new(
                line,
                ParseErrorKind::DuplicateSetting(name.to_owned()),
            ));
        }

        let header = Header {
            name: name.to_owned(),
            comment,
            pre_comments: mem::take(&mut self.pre_comments),
        };
        section.push_unchecked(Setting::from_header(header, value.to_owned()));

        Ok(())
    }

    fn take_header(&mut self, name: &str, comment: Option<Comment>) -> Header {
        Header {
            name: name.to_owned(),
            comment,
            pre_comments: mem::take(&mut self.pre_comments),
        }
    }
}

/// Splits `source` at `\r\n`, `\n` and lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(mem::take(&mut rest));
        };

        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Finds the first comment delimiter on `line` that starts a real comment.
///
/// A delimiter does not count when it directly follows a backslash, or when
/// there is a `"` somewhere to its left and another at or after it. Scanning
/// resumes after every rejected candidate. Returns the byte index and the
/// delimiter.
pub(crate) fn find_comment(line: &str, options: &ParseOptions) -> Option<(usize, char)> {
    let mut previous = None;

    for (index, c) in line.char_indices() {
        let escaped = previous == Some('\\');
        previous = Some(c);

        if !options.is_comment_char(c) || escaped {
            continue;
        }

        if is_in_quote_marks(line, index) {
            continue;
        }

        return Some((index, c));
    }

    None
}

// Only checks for a quote on each side; it does not pair quotes up.
fn is_in_quote_marks(line: &str, index: usize) -> bool {
    line[..index].contains('"') && line[index..].contains('"')
}
