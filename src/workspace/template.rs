use {
    crate::{
        error::{Error, FsOp},
        resolve::FIRST_INTERACTIVE_YEAR,
    },
    include_dir::{Dir, include_dir},
    std::{
        borrow::Cow,
        fmt, fs, io,
        path::{Path, PathBuf},
    },
};

pub static TPL_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/tpl");

/// Auxiliary runner copied next to interactive solutions.
pub const RUNNER_FILE: &str = "interactive_runner.py";

/// First year whose interactive problems need the separate runner. 2018
/// tooling bundled it with the judge.
pub const FIRST_RUNNER_YEAR: i32 = 2019;

/// Boilerplate the solution file starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Before 2018: read `tests.in`, write `tests.out`.
    Legacy,
    /// stdin/stdout submissions.
    Standard,
    /// Query/response loop against a judge.
    Interactive,
}

impl Template {
    pub fn select(year: i32, interactive: bool) -> Self {
        if year < FIRST_INTERACTIVE_YEAR {
            Template::Legacy
        } else if interactive {
            Template::Interactive
        } else {
            Template::Standard
        }
    }

    /// Template file name for solutions written in `ext`.
    pub fn file_name(self, ext: &str) -> String {
        format!("{self}.{ext}")
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Template::Legacy => "legacy",
            Template::Standard => "standard",
            Template::Interactive => "interactive",
        })
    }
}

pub fn needs_runner(year: i32, interactive: bool) -> bool {
    interactive && year >= FIRST_RUNNER_YEAR
}

/// Where template files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Embedded,
    /// User supplied directory with the same file names.
    Dir(PathBuf),
}

impl TemplateSource {
    pub fn load(&self, name: &str) -> Result<Cow<'static, [u8]>, Error> {
        match self {
            TemplateSource::Embedded => TPL_DIR
                .get_file(name)
                .map(|file| Cow::Borrowed(file.contents()))
                .ok_or_else(|| Error::TemplateNotFound {
                    path: Path::new("tpl").join(name),
                }),
            TemplateSource::Dir(dir) => {
                let path = dir.join(name);
                match fs::read(&path) {
                    Ok(bytes) => Ok(Cow::Owned(bytes)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        Err(Error::TemplateNotFound { path })
                    }
                    Err(e) => Err(Error::fs(FsOp::ReadTemplate, path, e)),
                }
            }
        }
    }
}
