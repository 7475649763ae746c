//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexreplyArgs, OutputFormat};
use crate::corpus::IntentRecord;
use crate::error::Result;
use crate::responder::MatchExplanation;

/// Result structure for a single answered question.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResult {
    pub query: String,
    pub response: String,
}

/// Result structure for the intent listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentList {
    pub intents: Vec<IntentRecord>,
}

/// Result structure for an explained match.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResult {
    #[serde(flatten)]
    pub explanation: MatchExplanation,
    /// Number of top intents shown in human output.
    #[serde(skip)]
    pub top: usize,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Write the result for a person reading a terminal.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for AnswerResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.response)?;
        Ok(())
    }
}

impl HumanOutput for IntentList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Intents:")?;
        writeln!(out, "════════")?;
        for (position, intent) in self.intents.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}. {}", position + 1, intent.label)?;
            writeln!(out, "   Example:  {}", intent.example_query)?;
            writeln!(out, "   Response: {}", intent.response)?;
        }
        writeln!(out)?;
        writeln!(out, "Total intents: {}", self.intents.len())?;
        Ok(())
    }
}

impl HumanOutput for ExplainResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        let explanation = &self.explanation;

        writeln!(out, "Query:        {}", explanation.query)?;
        writeln!(out, "Terms:        [{}]", explanation.terms.join(", "))?;
        writeln!(
            out,
            "Intent:       {} (#{}, score {:.4})",
            explanation.intent,
            explanation.intent_index + 1,
            explanation.score
        )?;
        writeln!(
            out,
            "Order number: {}",
            explanation.order_number.as_deref().unwrap_or("-")
        )?;
        writeln!(out, "Response:     {}", explanation.response)?;

        if self.top > 0 {
            let mut ranked: Vec<(usize, &str, f64)> = explanation
                .scores
                .iter()
                .enumerate()
                .map(|(index, s)| (index, s.intent.as_str(), s.score))
                .collect();
            // Stable sort keeps corpus order among equal scores.
            ranked.sort_by(|a, b| b.2.total_cmp(&a.2));

            writeln!(out)?;
            writeln!(out, "Top intents:")?;
            writeln!(out, "────────────")?;
            for (index, intent, score) in ranked.into_iter().take(self.top) {
                writeln!(out, "  {score:.4}  {intent} (#{})", index + 1)?;
            }
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &LexreplyArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out),
        OutputFormat::Json => output_json(result, args.pretty, out),
    }
}

/// Output in JSON format.
pub fn output_json<T: Serialize, W: Write>(result: &T, pretty: bool, out: &mut W) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::responder::IntentScore;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = LexreplyArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        output_result(result, &args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_answer_human_and_json() {
        let answer = AnswerResult {
            query: "Can I cancel my order?".to_string(),
            response: "Yes.".to_string(),
        };

        assert_eq!(render(&answer, &["lexreply", "intents"]), "Yes.\n");
        assert_eq!(
            render(&answer, &["lexreply", "-f", "json", "intents"]),
            "{\"query\":\"Can I cancel my order?\",\"response\":\"Yes.\"}\n"
        );
    }

    #[test]
    fn test_intent_list_human() {
        let list = IntentList {
            intents: vec![IntentRecord::new("Cancel Order", "Can I cancel?", "Yes.")],
        };

        let text = render(&list, &["lexreply", "intents"]);

        assert!(text.contains("1. Cancel Order"));
        assert!(text.contains("Example:  Can I cancel?"));
        assert!(text.contains("Total intents: 1"));
    }

    #[test]
    fn test_explain_json_skips_top() {
        let result = ExplainResult {
            explanation: MatchExplanation {
                query: "q".to_string(),
                terms: vec!["q".to_string()],
                intent_index: 0,
                intent: "A".to_string(),
                score: 0.5,
                order_number: None,
                response: "r".to_string(),
                scores: vec![IntentScore {
                    intent: "A".to_string(),
                    score: 0.5,
                }],
            },
            top: 3,
        };

        let json: serde_json::Value =
            serde_json::from_str(&render(&result, &["lexreply", "-f", "json", "intents"])).unwrap();

        assert_eq!(json["intent"], "A");
        assert!(json.get("top").is_none());
        assert!(json["order_number"].is_null());

        let text = render(&result, &["lexreply", "intents"]);
        assert!(text.contains("Order number: -"));
        assert!(text.contains("0.5000  A (#1)"));
    }
}
