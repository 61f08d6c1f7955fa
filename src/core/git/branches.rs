use super::command::{GitCommand, Options};
use super::runner::CommandRunner;
use crate::utils::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Which branches a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchQuery {
    All,
    RemoteOnly,
    LocalOnly,
}

impl BranchQuery {
    /// Flags passed to `git branch` for this query.
    pub fn options(self) -> Options {
        let mut options = Options::new();
        match self {
            BranchQuery::All => {
                options.insert("a".to_string(), true);
            }
            BranchQuery::RemoteOnly => {
                options.insert("r".to_string(), true);
            }
            BranchQuery::LocalOnly => {}
        }
        options
    }
}

/// Lists branches of a working copy via `git branch`.
///
/// The lister works on its own clone of the runner it was built from.
pub struct GitBranches<R> {
    runner: R,
}

impl<R: CommandRunner + Clone> GitBranches<R> {
    pub fn new(runner: &R) -> Self {
        Self {
            runner: runner.clone(),
        }
    }

    pub fn fetch_all(&mut self) -> Result<Vec<String>> {
        self.fetch(BranchQuery::All)
    }

    pub fn fetch_remote(&mut self) -> Result<Vec<String>> {
        self.fetch(BranchQuery::RemoteOnly)
    }

    pub fn fetch_local(&mut self) -> Result<Vec<String>> {
        self.fetch(BranchQuery::LocalOnly)
    }

    /// Runs `git branch` for `query` and returns one normalized name per
    /// output line, in the order git printed them.
    ///
    /// Empty output yields a single empty string; see [`is_empty_listing`].
    pub fn fetch(&mut self, query: BranchQuery) -> Result<Vec<String>> {
        self.runner.clear_output();
        let output = self.runner.branch(query.options())?;

        let branches: Vec<String> = split_output_lines(&output)
            .into_iter()
            .map(normalize_branch)
            .collect();

        trace!(?query, count = branches.len(), "parsed branch listing");
        Ok(branches)
    }

    /// Name of the currently checked out branch (`HEAD` when detached).
    pub fn head(&mut self) -> Result<String> {
        self.runner.clear_output();
        let output = self.runner.run(
            &GitCommand::new("rev-parse")
                .option("abbrev-ref", true)
                .arg("HEAD"),
        )?;

        Ok(strip_line_terminator(&output).to_string())
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

/// Strips the leading current-branch marker and indentation from a line of
/// `git branch` output. Trailing characters are left alone.
pub fn normalize_branch(raw_line: &str) -> String {
    raw_line.trim_start_matches([' ', '*']).to_string()
}

/// Splits command output on `\r\n`, `\n` or `\r` after dropping one trailing
/// line terminator. Always returns at least one element.
pub fn split_output_lines(output: &str) -> Vec<&str> {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    let line_break =
        LINE_BREAK.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"));

    line_break.split(strip_line_terminator(output)).collect()
}

/// True when a listing carries no branch names: either nothing at all or the
/// lone empty entry produced by empty output.
pub fn is_empty_listing(branches: &[String]) -> bool {
    match branches {
        [] => true,
        [only] => only.is_empty(),
        _ => false,
    }
}

fn strip_line_terminator(output: &str) -> &str {
    output
        .strip_suffix("\r\n")
        .or_else(|| output.strip_suffix('\n'))
        .or_else(|| output.strip_suffix('\r'))
        .unwrap_or(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;
    use crate::test_utils::RecordingRunner;
    use crate::utils::GitWrapError;
    use std::process::Command;

    fn options(pairs: &[(&str, bool)]) -> Options {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_normalize_branch() {
        assert_eq!(normalize_branch(" main"), "main");
        assert_eq!(normalize_branch("* main"), "main");
        assert_eq!(normalize_branch("  * origin/HEAD"), "origin/HEAD");
        assert_eq!(normalize_branch("  feature/x  "), "feature/x  ");
        assert_eq!(normalize_branch("main*"), "main*");
        assert_eq!(normalize_branch("   "), "");
        assert_eq!(normalize_branch("\tmain"), "\tmain");
    }

    #[test]
    fn test_split_output_lines() {
        assert_eq!(split_output_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_output_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_output_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_output_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_output_lines(""), vec![""]);
        assert_eq!(split_output_lines("\n"), vec![""]);
    }

    #[test]
    fn test_only_one_trailing_terminator_is_dropped() {
        assert_eq!(split_output_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_output_lines("a\r\n\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_branch_query_options() {
        assert_eq!(BranchQuery::All.options(), options(&[("a", true)]));
        assert_eq!(BranchQuery::RemoteOnly.options(), options(&[("r", true)]));
        assert!(BranchQuery::LocalOnly.options().is_empty());
    }

    #[test]
    fn test_fetch_all_parses_listing() {
        let runner = RecordingRunner::with_output("* main\n  develop\n  feature/x\n");
        let mut branches = GitBranches::new(&runner);

        assert_eq!(
            branches.fetch_all().unwrap(),
            vec!["main", "develop", "feature/x"]
        );
    }

    #[test]
    fn test_fetch_preserves_count_and_order() {
        let raw = "  zeta\n* alpha\n  zeta\n  remotes/origin/main\n";
        let runner = RecordingRunner::with_output(raw);
        let mut branches = GitBranches::new(&runner);

        let listed = branches.fetch_all().unwrap();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed, vec!["zeta", "alpha", "zeta", "remotes/origin/main"]);
    }

    #[test]
    fn test_fetch_handles_crlf_output() {
        let runner = RecordingRunner::with_output("* main\r\n  develop\r\n");
        let mut branches = GitBranches::new(&runner);

        assert_eq!(branches.fetch_local().unwrap(), vec!["main", "develop"]);
    }

    #[test]
    fn test_empty_output_yields_single_empty_entry() {
        let runner = RecordingRunner::with_output("");
        let mut branches = GitBranches::new(&runner);

        let listed = branches.fetch_local().unwrap();
        assert_eq!(listed, vec![String::new()]);
        assert!(is_empty_listing(&listed));
    }

    #[test]
    fn test_whitespace_lines_are_kept() {
        let runner = RecordingRunner::with_output("* main\n   \n  develop\n");
        let mut branches = GitBranches::new(&runner);

        assert_eq!(branches.fetch_all().unwrap(), vec!["main", "", "develop"]);
    }

    #[test]
    fn test_queries_pass_expected_flags() {
        let runner = RecordingRunner::with_output("* main\n");
        let mut branches = GitBranches::new(&runner);

        branches.fetch_all().unwrap();
        branches.fetch_remote().unwrap();
        branches.fetch_local().unwrap();

        let recorded: Vec<Options> = branches
            .runner()
            .commands()
            .iter()
            .map(|command| {
                assert_eq!(command.name(), "branch");
                command.options().clone()
            })
            .collect();
        assert_eq!(
            recorded,
            vec![options(&[("a", true)]), options(&[("r", true)]), Options::new()]
        );
    }

    #[test]
    fn test_output_cleared_before_each_fetch() {
        let runner = RecordingRunner::with_output("* main\n");
        let mut branches = GitBranches::new(&runner);

        branches.fetch_all().unwrap();
        branches.fetch_all().unwrap();
        let runner = branches.into_runner();
        assert_eq!(runner.clear_count(), 2);
        assert_eq!(runner.output(), "* main\n");
    }

    #[test]
    fn test_failure_propagates_from_every_query() {
        let runner = RecordingRunner::failing(128, "fatal: not a git repository");
        let mut branches = GitBranches::new(&runner);

        for result in [
            branches.fetch_all(),
            branches.fetch_remote(),
            branches.fetch_local(),
        ] {
            match result {
                Err(GitWrapError::ProcessExecution {
                    exit_code, message, ..
                }) => {
                    assert_eq!(exit_code, Some(128));
                    assert_eq!(message, "fatal: not a git repository");
                }
                other => panic!("Expected ProcessExecution, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_lister_is_isolated_from_caller_runner() {
        let mut runner = RecordingRunner::with_output("* main\n");
        let mut branches = GitBranches::new(&runner);

        runner.set_output("* other\n");
        runner.run(&GitCommand::new("status")).unwrap();

        assert_eq!(branches.fetch_local().unwrap(), vec!["main"]);
        assert!(branches
            .runner()
            .commands()
            .iter()
            .all(|command| command.name() == "branch"));
    }

    #[test]
    fn test_head_strips_terminator() {
        let runner = RecordingRunner::with_output("feature/x\n");
        let mut branches = GitBranches::new(&runner);

        assert_eq!(branches.head().unwrap(), "feature/x");
        let recorded = &branches.runner().commands()[0];
        assert_eq!(recorded.to_args(), vec!["rev-parse", "--abbrev-ref", "HEAD"]);
    }

    #[test]
    fn test_is_empty_listing() {
        assert!(is_empty_listing(&[]));
        assert!(is_empty_listing(&[String::new()]));
        assert!(!is_empty_listing(&["main".to_string()]));
        assert!(!is_empty_listing(&[String::new(), String::new()]));
    }

    #[test]
    fn test_real_repository_listing() {
        let (temp_dir, working_copy) = setup_test_repo();

        Command::new("git")
            .current_dir(temp_dir.path())
            .args(["branch", "feature/x"])
            .status()
            .expect("Failed to create branch");

        let mut branches = GitBranches::new(&working_copy);
        assert_eq!(branches.fetch_local().unwrap(), vec!["feature/x", "main"]);
        assert_eq!(branches.fetch_all().unwrap(), vec!["feature/x", "main"]);
        assert_eq!(branches.fetch_remote().unwrap(), vec![String::new()]);
        assert_eq!(branches.head().unwrap(), "main");
    }
}
