use pest::Parser;
use pest_derive::Parser;
use crate::error::{ConfigError, ParseResult};

#[derive(Parser)]
#[grammar = "dayzcfg.pest"]
pub struct DayzParser;

/// A setting line split into its structural parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLine<'a> {
    /// Number of leading tab characters
    pub indentation: usize,

    /// Key text before the first `=`, original casing
    pub key: &'a str,

    /// Value text after the first `=`, trailing `;` removed
    pub value: &'a str,
}

impl DayzParser {
    /// Split a `<tabs>key=value;` line.
    ///
    /// Fails with [`ConfigError::Parse`] when the line has no `=`.
    pub fn split_line(line: &str) -> ParseResult<SplitLine<'_>> {
        let mut pairs = DayzParser::parse(Rule::setting, line)?;
        let setting = pairs
            .next()
            .ok_or_else(|| ConfigError::parse(1, "empty setting line"))?;

        let mut split = SplitLine {
            indentation: 0,
            key: "",
            value: "",
        };

        for pair in setting.into_inner() {
            match pair.as_rule() {
                Rule::indent => split.indentation = pair.as_str().len(),
                Rule::key => split.key = pair.as_str(),
                Rule::value => split.value = pair.as_str(),
                _ => {}
            }
        }

        Ok(split)
    }
}
