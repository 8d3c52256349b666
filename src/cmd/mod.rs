use {
    crate::{
        config::{ROOT_ENV, Settings},
        paths,
        resolve::RawArgs,
        workspace::WorkspaceBuilder,
    },
    anyhow::{Context, Result},
    argh::FromArgs,
    std::{
        env,
        path::{Path, PathBuf},
        process,
    },
    tracing::debug,
};

/// Create a new problem workspace under `<root>/<competition>/<year>/<round>/<name>`.
///
/// Competition, year and round may be omitted when running from inside the
/// corresponding directory of the workspace root.
#[derive(FromArgs, Debug)]
#[argh(help_triggers("-h", "--help"))]
pub struct NewProblemCmd {
    #[argh(switch, short = 'i')]
    /// interactive problem (2018 and later)
    interactive: bool,

    #[argh(option, short = 'c')]
    /// competition identifier
    competition: Option<String>,

    #[argh(option, short = 'y')]
    /// competition year
    year: Option<String>,

    #[argh(option, short = 'r')]
    /// round identifier
    round: Option<String>,

    #[argh(option, short = 'p')]
    /// problem name
    name: Option<String>,

    #[argh(option)]
    /// workspace root (defaults to $CODEJAM_ROOT, the nearest directory with
    /// `codejam.toml`, or the current directory)
    root: Option<PathBuf>,
}

impl NewProblemCmd {
    /// Parse the process arguments, accepting `--long=value` as well.
    ///
    /// Exits the process on `--help` (status 0) and on malformed arguments
    /// (status 1), the way `argh::from_env` does.
    pub fn from_env() -> Self {
        let args = env::args().collect::<Vec<_>>();
        let cmd = args
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("new-problem");
        let rest = split_long_options(args.iter().skip(1).map(String::as_str));
        let rest = rest.iter().map(String::as_str).collect::<Vec<_>>();

        NewProblemCmd::from_args(&[cmd], &rest).unwrap_or_else(|early_exit| {
            match early_exit.status {
                Ok(()) => {
                    println!("{}", early_exit.output);
                    process::exit(0)
                }
                Err(()) => {
                    eprintln!(
                        "{}\nRun {cmd} --help for more information.",
                        early_exit.output
                    );
                    process::exit(1)
                }
            }
        })
    }

    /// Resolve the problem and build its workspace.
    pub fn run(&self) -> Result<PathBuf> {
        let cwd = env::current_dir()
            .and_then(|cwd| cwd.canonicalize())
            .context("failed to resolve current directory")?;
        let settings = Settings::discover(
            self.root.as_deref(),
            env::var_os(ROOT_ENV).map(PathBuf::from),
            &cwd,
        )?;

        debug!(depth = paths::depth(settings.root(), &cwd), "working directory below root");

        let args = self.raw_args().resolve(settings.root(), &cwd)?;
        debug!(
            competition = args.competition(),
            year = args.year(),
            round = args.round_name(),
            problem = args.problem_name(),
            interactive = args.interactive(),
            "resolved arguments"
        );
        println!("Competition / Year / Round / Problem: {args}");

        let templates = settings.template_source();
        let path = WorkspaceBuilder::new(settings.root(), &templates, settings.extension())
            .build(&args)?;
        Ok(path)
    }

    fn raw_args(&self) -> RawArgs {
        RawArgs {
            competition: self.competition.clone(),
            year: self.year.clone(),
            round: self.round.clone(),
            problem_name: self.name.clone(),
            interactive: self.interactive,
        }
    }
}

/// Split `--long=value` into `--long value`. Everything after a bare `--` is
/// passed through untouched.
fn split_long_options<'a>(args: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if !passthrough && arg == "--" {
            passthrough = true;
        }
        match arg.split_once('=') {
            Some((flag, value)) if !passthrough && flag.starts_with("--") => {
                out.push(flag.to_string());
                out.push(value.to_string());
            }
            _ => out.push(arg.to_string()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<NewProblemCmd, argh::EarlyExit> {
        let args = split_long_options(args.iter().copied());
        let args = args.iter().map(String::as_str).collect::<Vec<_>>();
        NewProblemCmd::from_args(&["new-problem"], &args)
    }

    #[test]
    fn short_flags() {
        let cmd = parse(&["-i", "-c", "CodeJam", "-y", "2020", "-r", "Qual", "-p", "A"]).unwrap();
        let raw = cmd.raw_args();
        assert!(raw.interactive);
        assert_eq!(raw.competition.as_deref(), Some("CodeJam"));
        assert_eq!(raw.year.as_deref(), Some("2020"));
        assert_eq!(raw.round.as_deref(), Some("Qual"));
        assert_eq!(raw.problem_name.as_deref(), Some("A"));
        assert_eq!(cmd.root, None);
    }

    #[test]
    fn long_flags_with_equals() {
        let cmd = parse(&[
            "--interactive",
            "--competition=CodeJam",
            "--year=2019",
            "--round",
            "Round 1A",
            "--name=x=y",
            "--root=/tmp/jam",
        ])
        .unwrap();
        let raw = cmd.raw_args();
        assert!(raw.interactive);
        assert_eq!(raw.competition.as_deref(), Some("CodeJam"));
        assert_eq!(raw.year.as_deref(), Some("2019"));
        assert_eq!(raw.round.as_deref(), Some("Round 1A"));
        assert_eq!(raw.problem_name.as_deref(), Some("x=y"));
        assert_eq!(cmd.root, Some(PathBuf::from("/tmp/jam")));
    }

    #[test]
    fn everything_optional() {
        let raw = parse(&[]).unwrap().raw_args();
        assert!(!raw.interactive);
        assert!(raw.competition.is_none());
        assert!(raw.problem_name.is_none());
    }

    #[test]
    fn year_is_kept_as_text() {
        let raw = parse(&["-y", "twenty"]).unwrap().raw_args();
        assert_eq!(raw.year.as_deref(), Some("twenty"));
    }

    #[test]
    fn help_exits_successfully() {
        for flag in ["-h", "--help"] {
            let exit = parse(&[flag]).unwrap_err();
            assert_eq!(exit.status, Ok(()));
            assert!(exit.output.contains("--competition"));
        }
    }

    #[test]
    fn unknown_flag_fails() {
        let exit = parse(&["--bogus"]).unwrap_err();
        assert_eq!(exit.status, Err(()));
    }

    #[test]
    fn split_stops_at_double_dash() {
        assert_eq!(
            split_long_options(["--year=2020", "-p", "A", "--", "--x=y"]),
            vec!["--year", "2020", "-p", "A", "--", "--x=y"]
        );
    }
}
