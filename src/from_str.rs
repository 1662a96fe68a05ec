use anyhow::Context;
use pest::{iterators::Pair, Parser};
use std::str::FromStr;

use crate::{Attribute, Attributes};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./attrs.pest"]
struct AttrParser;

impl FromStr for Attributes {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut attrs = Attributes::default();
        for Attribute { name, value } in scan(s)? {
            attrs.set(&name, &value);
        }
        Ok(attrs)
    }
}

/// Scans a string for `key="value"` / `key='value'` / `key=value` runs.
/// Anything between runs is skipped, so garbage input yields an empty list.
pub(crate) fn scan(input: &str) -> anyhow::Result<Vec<Attribute>> {
    let list = AttrParser::parse(Rule::attr_list, input.trim())
        .context("Failed to parse attribute string.")?
        .next()
        .context("Attribute string must contain the attr_list rule")?;

    let mut found = Vec::new();
    for rule in list.into_inner() {
        match rule.as_rule() {
            Rule::attr => found.push(rule.try_into()?),
            Rule::EOI => {}
            otherwise => {
                return Err(anyhow::Error::msg(format!(
                    "Invalid inner rule while scan attributes: {:?}",
                    otherwise
                )))
            }
        }
    }

    Ok(found)
}

impl TryFrom<Pair<'_, Rule>> for Attribute {
    type Error = anyhow::Error;

    fn try_from(value: Pair<'_, Rule>) -> Result<Self, Self::Error> {
        let mut attr = Attribute::default();
        for rule in value.into_inner() {
            match rule.as_rule() {
                Rule::key => attr.name = rule.as_str().trim().to_string(),
                Rule::double_inner | Rule::single_inner | Rule::bare => {
                    attr.value = rule.as_str().trim().to_string()
                }
                otherwise => {
                    return Err(anyhow::Error::msg(format!(
                        "Invalid inner rule while parse attr: {:?}",
                        otherwise
                    )))
                }
            }
        }

        Ok(attr)
    }
}

/// Splits a tag declaration like `"<div class='x'>"` or `"div class='x'"`
/// into the tag name and the inline attribute remainder, if any.
pub(crate) fn split_tag(decl: &str) -> (String, Option<String>) {
    let cleaned = decl.replace(['<', '>'], "");
    let trimmed = cleaned.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name.to_string(), Some(rest.to_string())),
        None => (trimmed.to_string(), None),
    }
}
