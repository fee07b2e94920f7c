use clap::Args;
use mindtrx::assessment::{
    feedback_for, quiz_items, score, sections, AnswerSet, ScoreResult,
};
use mindtrx::error::AppError;
use serde_json::Value;
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Comma-separated answers in questionnaire order (27 values, 1-5)
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub(crate) answers: Vec<i64>,
    /// Print the score result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let values: Vec<Value> = args.answers.iter().map(|value| Value::from(*value)).collect();
    let answers = AnswerSet::parse(&values)?;
    let result = score(&answers);

    if args.json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_score(&result));
    }
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    print!("{}", render_questions());
    Ok(())
}

fn render_score(result: &ScoreResult) -> String {
    let feedback = feedback_for(result);
    let mut out = String::new();
    let _ = writeln!(out, "Inner Mind Integration Inventory");
    let _ = writeln!(
        out,
        "  communication: {:>2}/50 (raw {}, {})",
        result.comm50,
        result.comm_raw,
        result.comm_band()
    );
    let _ = writeln!(
        out,
        "  trust:         {:>2}/50 (raw {}, {})",
        result.trust50,
        result.trust_raw,
        result.trust_band()
    );
    let _ = writeln!(out, "  quadrant: {}", result.quadrant);
    let _ = writeln!(out, "  position: {}", result.position);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", feedback.quadrant.summary);
    let _ = writeln!(out, "{}", feedback.quadrant.detailed);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", feedback.position.summary);
    let _ = writeln!(out, "{}", feedback.position.detailed);
    out
}

fn render_questions() -> String {
    let mut out = String::new();
    for section in sections() {
        let _ = writeln!(out, "{}", section.title);
        let _ = writeln!(out, "  {}", section.description);
        for item in quiz_items()
            .iter()
            .filter(|item| item.dimension == section.dimension)
        {
            let _ = writeln!(out, "  {:>2}. {}", item.id, item.text);
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_score_lists_bands_and_labels() {
        let answers = AnswerSet::try_from(&[3u8; 27][..]).expect("valid");
        let text = render_score(&score(&answers));
        assert!(text.contains("communication: 30/50 (raw 42, highLow)"));
        assert!(text.contains("quadrant: Integrated Alchemist"));
        assert!(text.contains("position: Grounded Mystic"));
        assert!(text.contains("You've achieved a powerful synthesis of practice and trust."));
    }

    #[test]
    fn render_questions_groups_by_section() {
        let text = render_questions();
        let communication = text
            .find("Communication with the Inner Mind")
            .expect("communication heading");
        let trust = text.find("Trust in the Inner Mind").expect("trust heading");
        let first_trust_item = text.find("15. I believe").expect("item 15");
        assert!(communication < trust);
        assert!(trust < first_trust_item);
        assert!(text.contains(" 1. I journal"));
    }

    #[test]
    fn run_score_rejects_partial_answer_lists() {
        let err = run_score(ScoreArgs {
            answers: vec![3, 3, 3],
            json: false,
        })
        .expect_err("too few answers");
        assert!(err.to_string().contains("expected 27 answers"));
    }
}
