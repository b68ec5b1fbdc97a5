use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest::iterators::Pairs;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "rollcall.pest"]
pub struct Parser;

impl Parser {
    /// Parse a whole query and return the pairs found inside the command
    pub fn parse_command(input: &str) -> Result<Pairs<'_, Rule>> {
        let mut pairs = <Self as pest::Parser<Rule>>::parse(Rule::command, input).map_err(|e| {
            tracing::debug!("pest rejected `{}`: {}", input, e);
            Error::Parse
        })?;
        pairs
            .next()
            .map(|command| command.into_inner())
            .ok_or(Error::Parse)
    }

    /// Lazily yield the dice pairs, skipping separators
    pub fn extract_dice<'i>(pairs: Pairs<'i, Rule>) -> impl Iterator<Item = Pair<'i, Rule>> {
        pairs.filter(|pair| pair.as_rule() == Rule::dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> Vec<&str> {
        Parser::extract_dice(Parser::parse_command(input).unwrap())
            .map(|pair| pair.as_str())
            .collect()
    }

    #[test]
    fn finds_every_expression_in_order() {
        assert_eq!(
            vec!["1d6 +2", "D12 -4", "18d100"],
            matched("1d6 +2, D12 -4, 18d100")
        );
    }

    #[test]
    fn separators_are_ignored() {
        assert_eq!(vec!["d20 ", "3d4+1"], matched("attack: d20 then 3d4+1!"));
        assert!(matched("no dice here").is_empty());
        assert!(matched("").is_empty());
    }

    #[test]
    fn count_needs_to_touch_the_marker() {
        assert_eq!(vec!["d6"], matched("5 d6"));
        assert_eq!(vec!["d6"], matched("3dd6"));
        assert_eq!(vec!["12d6"], matched("x12d6"));
    }

    #[test]
    fn single_whitespace_before_modifier() {
        assert_eq!(vec!["2d6\t-1"], matched("2d6\t-1"));
        assert_eq!(vec!["2d6 "], matched("2d6  +3"));
        assert_eq!(vec!["2d6 "], matched("2d6 +"));
        assert_eq!(vec!["2d6"], matched("2d6+"));
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(vec!["d6+5", "d6"], matched("d6+5d6"));
        assert_eq!(vec!["d6 ", "d8"], matched("d6 d8"));
    }

    #[test]
    fn inner_pairs() {
        let dice = Parser::extract_dice(Parser::parse_command("0D10 -3").unwrap())
            .next()
            .unwrap();
        let inner = dice
            .into_inner()
            .map(|pair| (pair.as_rule(), pair.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                (Rule::count, "0"),
                (Rule::sides, "10"),
                (Rule::modifier, "-3")
            ],
            inner
        );
    }
}
