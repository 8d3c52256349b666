pub mod template;

use {
    crate::{
        error::{Error, FsOp},
        resolve::ResolvedArgs,
    },
    std::{
        fs, io,
        path::{Path, PathBuf},
    },
    template::{RUNNER_FILE, Template, TemplateSource, needs_runner},
    tracing::{debug, warn},
};

/// Empty input file every workspace starts with.
pub const TESTS_FILE: &str = "tests.in";

/// Creates `root/competition/year/round/problem` and fills it from templates.
#[derive(Debug)]
pub struct WorkspaceBuilder<'a> {
    root: &'a Path,
    templates: &'a TemplateSource,
    extension: &'a str,
}

impl<'a> WorkspaceBuilder<'a> {
    pub fn new(root: &'a Path, templates: &'a TemplateSource, extension: &'a str) -> Self {
        Self {
            root,
            templates,
            extension,
        }
    }

    /// Create and populate the workspace, returning its path.
    ///
    /// Nothing is touched if the workspace already exists or a template is
    /// missing. A failure after the directory has been created leaves it
    /// partially populated; the returned error names the failed step.
    pub fn build(&self, args: &ResolvedArgs) -> Result<PathBuf, Error> {
        let template = Template::select(args.year(), args.interactive());
        debug!(%template, extension = self.extension, "selected template");

        // Load everything up front, so that a missing template does not leave
        // an empty workspace behind.
        let main_src = self.templates.load(&template.file_name(self.extension))?;
        let runner_src = needs_runner(args.year(), args.interactive())
            .then(|| self.templates.load(RUNNER_FILE))
            .transpose()?;

        let target = self.root.join(args.relative_path());
        create_workspace_dir(&target)?;

        self.populate(&target, template, &main_src, runner_src.as_deref())
            .inspect_err(|e| warn!(?target, error = %e, "workspace left partially populated"))?;

        Ok(target)
    }

    fn populate(
        &self,
        target: &Path,
        template: Template,
        main_src: &[u8],
        runner_src: Option<&[u8]>,
    ) -> Result<(), Error> {
        println!("Copying {template} template...");
        let main_file = target.join(format!("main.{}", self.extension));
        fs::write(&main_file, main_src).map_err(|e| Error::fs(FsOp::WriteMain, &main_file, e))?;

        if let Some(runner_src) = runner_src {
            println!("Copying interactive runner...");
            let runner_file = target.join(RUNNER_FILE);
            fs::write(&runner_file, runner_src)
                .map_err(|e| Error::fs(FsOp::CopyRunner, &runner_file, e))?;
        }

        println!("Creating empty test input file...");
        let tests_file = target.join(TESTS_FILE);
        fs::write(&tests_file, "").map_err(|e| Error::fs(FsOp::CreateTestInput, &tests_file, e))
    }
}

/// Parents are created as needed, the workspace directory itself must not
/// exist yet. The final `create_dir` is atomic, so of two racing invocations
/// only one gets past it.
fn create_workspace_dir(target: &Path) -> Result<(), Error> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::fs(FsOp::CreateDir, parent, e))?;
    }
    match fs::create_dir(target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(Error::WorkspaceAlreadyExists {
                path: target.to_path_buf(),
            })
        }
        Err(e) => Err(Error::fs(FsOp::CreateDir, target, e)),
    }
}
