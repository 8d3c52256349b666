use {
    crate::{
        error::{Error, Field},
        paths,
    },
    std::{
        fmt,
        path::{Path, PathBuf},
    },
};

/// First year with interactive problems.
pub const FIRST_INTERACTIVE_YEAR: i32 = 2018;

/// Problem identification as received from the command line.
///
/// Every text field is optional: competition, year and round may be inferred
/// from the working directory, the problem name never is.
#[derive(Debug, Default, Clone)]
pub struct RawArgs {
    pub competition: Option<String>,
    pub year: Option<String>,
    pub round: Option<String>,
    pub problem_name: Option<String>,
    pub interactive: bool,
}

/// Fully resolved and validated problem identification.
///
/// Only obtainable through [`RawArgs::resolve`], so `interactive` always
/// implies `year >= 2018`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    competition: String,
    year: i32,
    round_name: String,
    problem_name: String,
    interactive: bool,
}

impl RawArgs {
    /// Resolve missing fields against the position of `cwd` below `root`.
    ///
    /// Explicit values always win over inferred ones. Fails with the first
    /// problem found; performs no I/O.
    pub fn resolve(self, root: &Path, cwd: &Path) -> Result<ResolvedArgs, Error> {
        let inferred = paths::infer(root, cwd);
        let positional = |level: usize| inferred.get(level).cloned();

        let competition = supplied(self.competition).or_else(|| positional(0));
        let year = supplied(self.year).or_else(|| positional(1));
        let round_name = supplied(self.round).or_else(|| positional(2));
        let problem_name = supplied(self.problem_name);

        // A malformed year is reported even when other fields are missing.
        let year = year.map(|text| parse_year(&text)).transpose()?;

        let resolved = ResolvedArgs {
            competition: competition.ok_or(Error::missing(Field::Competition))?,
            year: year.ok_or(Error::missing(Field::Year))?,
            round_name: round_name.ok_or(Error::missing(Field::Round))?,
            problem_name: problem_name.ok_or(Error::missing(Field::ProblemName))?,
            interactive: self.interactive,
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

impl ResolvedArgs {
    pub fn competition(&self) -> &str {
        &self.competition
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn round_name(&self) -> &str {
        &self.round_name
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// `competition/year/round/problem`, relative to the workspace root.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.competition);
        path.push(self.year.to_string());
        path.push(&self.round_name);
        path.push(&self.problem_name);
        path
    }

    fn validate(&self) -> Result<(), Error> {
        if self.interactive && self.year < FIRST_INTERACTIVE_YEAR {
            return Err(Error::InteractiveUnsupportedForYear { year: self.year });
        }
        Ok(())
    }
}

impl fmt::Display for ResolvedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.competition, self.year, self.round_name, self.problem_name
        )?;
        if self.interactive {
            f.write_str(" (interactive)")?;
        }
        Ok(())
    }
}

/// Empty strings count as not supplied.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_year(text: &str) -> Result<i32, Error> {
    text.parse().map_err(|_| Error::InvalidYear {
        text: text.to_string(),
    })
}
