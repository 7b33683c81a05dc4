//! Pipeline parsing using pest
//!
//! Converts a stored command string into an ordered sequence of stages,
//! splitting on the literal `|` character and on whitespace. Quoting and
//! escaping are not supported.

use pest::Parser;
use pest_derive::Parser;

use crate::error::UgError;

#[derive(Parser)]
#[grammar = "parser/pipeline.pest"]
struct PipelineParser;

/// One program invocation within a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Parse a command string into its pipeline stages.
///
/// The grammar only rejects input when some stage has no tokens, so every
/// parse failure is reported as [`UgError::EmptyStage`]. On success the
/// returned vector has at least one stage.
pub fn parse_pipeline(command: &str) -> Result<Vec<StageSpec>, UgError> {
    let empty_stage = || UgError::EmptyStage {
        command: command.to_string(),
    };

    let mut pairs =
        PipelineParser::parse(Rule::pipeline, command).map_err(|_| empty_stage())?;
    let pipeline = pairs.next().ok_or_else(empty_stage)?;

    let mut stages = Vec::new();
    for stage in pipeline.into_inner() {
        // The pipeline's inner pairs also contain the EOI marker.
        if stage.as_rule() != Rule::stage {
            continue;
        }
        let mut tokens = stage.into_inner().map(|token| token.as_str().to_string());
        let program = tokens.next().ok_or_else(empty_stage)?;
        stages.push(StageSpec {
            program,
            args: tokens.collect(),
        });
    }

    Ok(stages)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn stage(program: &str, args: &[&str]) -> StageSpec {
        StageSpec {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    #[test]
    fn test_single_stage() {
        let stages = parse_pipeline("echo hi").unwrap();
        assert_eq!(stages, vec![stage("echo", &["hi"])]);
    }

    #[test]
    fn test_program_without_args() {
        let stages = parse_pipeline("ls").unwrap();
        assert_eq!(stages, vec![stage("ls", &[])]);
    }

    #[test]
    fn test_two_stages() {
        let stages = parse_pipeline("echo hi | grep h").unwrap();
        assert_eq!(stages, vec![stage("echo", &["hi"]), stage("grep", &["h"])]);
    }

    #[test]
    fn test_three_stages_keep_argument_order() {
        let stages = parse_pipeline("cat /var/log/syslog | grep -i error | wc -l").unwrap();
        assert_eq!(
            stages,
            vec![
                stage("cat", &["/var/log/syslog"]),
                stage("grep", &["-i", "error"]),
                stage("wc", &["-l"]),
            ]
        );
    }

    #[test]
    fn test_extra_whitespace_is_collapsed() {
        let stages = parse_pipeline("  echo   hi\t|  grep  h  ").unwrap();
        assert_eq!(stages, vec![stage("echo", &["hi"]), stage("grep", &["h"])]);
    }

    #[test]
    fn test_pipe_without_surrounding_spaces() {
        let stages = parse_pipeline("echo hi|grep h").unwrap();
        assert_eq!(stages, vec![stage("echo", &["hi"]), stage("grep", &["h"])]);
    }

    #[test]
    fn test_doubled_pipe_is_empty_stage() {
        assert!(matches!(
            parse_pipeline("echo hi ||  grep h"),
            Err(UgError::EmptyStage { .. })
        ));
    }

    #[test]
    fn test_leading_pipe_is_empty_stage() {
        assert!(matches!(
            parse_pipeline("| grep h"),
            Err(UgError::EmptyStage { .. })
        ));
    }

    #[test]
    fn test_trailing_pipe_is_empty_stage() {
        assert!(matches!(
            parse_pipeline("echo hi |"),
            Err(UgError::EmptyStage { .. })
        ));
    }

    #[test]
    fn test_empty_command_is_empty_stage() {
        assert!(matches!(
            parse_pipeline(""),
            Err(UgError::EmptyStage { .. })
        ));
    }

    #[test]
    fn test_whitespace_only_command_is_empty_stage() {
        assert!(matches!(
            parse_pipeline("   \t  "),
            Err(UgError::EmptyStage { .. })
        ));
    }
}
