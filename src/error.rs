use std::{fmt, io, path::PathBuf};

/// Identifying field of a problem workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Competition,
    Year,
    Round,
    ProblemName,
}

impl Field {
    /// Command line flag that supplies the field.
    pub fn flag(self) -> &'static str {
        match self {
            Field::Competition => "-c/--competition",
            Field::Year => "-y/--year",
            Field::Round => "-r/--round",
            Field::ProblemName => "-p/--name",
        }
    }

    /// Whether the field can be read off the working directory.
    pub fn inferable(self) -> bool {
        !matches!(self, Field::ProblemName)
    }

    fn hint(self) -> String {
        if self.inferable() {
            format!(
                "pass {} or run from inside a directory that names the {self}",
                self.flag()
            )
        } else {
            format!("pass {}", self.flag())
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Competition => "competition",
            Field::Year => "year",
            Field::Round => "round",
            Field::ProblemName => "problem name",
        })
    }
}

/// Filesystem step that failed while building a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    CreateDir,
    ReadTemplate,
    WriteMain,
    CopyRunner,
    CreateTestInput,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FsOp::CreateDir => "create directory",
            FsOp::ReadTemplate => "read template",
            FsOp::WriteMain => "write main file",
            FsOp::CopyRunner => "copy interactive runner",
            FsOp::CreateTestInput => "create test input",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing {field}: {}", field.hint())]
    MissingArgument { field: Field },

    #[error("invalid year {text:?}: not an integer")]
    InvalidYear { text: String },

    #[error("interactive problems are not supported before 2018 (year {year})")]
    InteractiveUnsupportedForYear { year: i32 },

    #[error("workspace already exists: {path:?}")]
    WorkspaceAlreadyExists { path: PathBuf },

    #[error("template not found: {path:?}")]
    TemplateNotFound { path: PathBuf },

    #[error("failed to {op} {path:?}")]
    Filesystem {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn missing(field: Field) -> Self {
        Error::MissingArgument { field }
    }

    pub fn fs(op: FsOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}
