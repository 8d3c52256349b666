use {
    crate::workspace::template::TemplateSource,
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    tap::Tap,
    tracing::debug,
};

/// Marks the workspace root and holds optional settings.
pub const CONFIG_FILE: &str = "codejam.toml";

/// Environment variable naming the workspace root.
pub const ROOT_ENV: &str = "CODEJAM_ROOT";

/// Contents of `codejam.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Solution language; picks the templates and names `main.<extension>`.
    pub extension: String,

    /// Directory with custom templates. Relative paths are resolved against
    /// the root.
    pub templates: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: "rs".to_string(),
            templates: None,
        }
    }
}

impl Config {
    /// Load `codejam.toml` from `root`, defaults if there is none.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("failed to read {path:?}"))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {path:?}"))
    }
}

/// Workspace root together with its configuration.
#[derive(Debug)]
pub struct Settings {
    root: PathBuf,
    config: Config,
}

impl Settings {
    /// Locate the workspace root.
    ///
    /// Precedence: explicit `--root`, then `$CODEJAM_ROOT`, then the nearest
    /// ancestor of `cwd` holding `codejam.toml`, then `cwd` itself. Relative
    /// roots are taken relative to `cwd`. The result is canonicalized.
    pub fn discover(explicit: Option<&Path>, from_env: Option<PathBuf>, cwd: &Path) -> Result<Self> {
        let root = match explicit
            .map(Path::to_path_buf)
            .or(from_env.filter(|p| !p.as_os_str().is_empty()))
        {
            Some(root) => cwd.join(root),
            None => find_marked_root(cwd).unwrap_or_else(|| cwd.to_path_buf()),
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("root directory not found: {root:?}"))?
            .tap(|root| debug!(?root, "workspace root"));
        let config = Config::load(&root)?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.config.extension
    }

    pub fn template_source(&self) -> TemplateSource {
        match &self.config.templates {
            Some(dir) => TemplateSource::Dir(self.root.join(dir)),
            None => TemplateSource::Embedded,
        }
    }
}

fn find_marked_root(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::TempDir};

    fn canonical(path: &Path) -> PathBuf {
        path.canonicalize().unwrap()
    }

    #[test]
    fn falls_back_to_cwd() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::discover(None, None, dir.path()).unwrap();
        assert_eq!(settings.root(), canonical(dir.path()));
        assert_eq!(settings.extension(), "rs");
        assert_eq!(settings.template_source(), TemplateSource::Embedded);
    }

    #[test]
    fn marker_in_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "").unwrap();
        let cwd = dir.path().join("CodeJam/2020");
        fs::create_dir_all(&cwd).unwrap();

        let settings = Settings::discover(None, None, &cwd).unwrap();
        assert_eq!(settings.root(), canonical(dir.path()));
    }

    #[test]
    fn explicit_beats_env_beats_marker() {
        let marked = TempDir::new().unwrap();
        fs::write(marked.path().join(CONFIG_FILE), "").unwrap();
        let env_root = TempDir::new().unwrap();
        let flag_root = TempDir::new().unwrap();

        let settings = Settings::discover(
            Some(flag_root.path()),
            Some(env_root.path().to_path_buf()),
            marked.path(),
        )
        .unwrap();
        assert_eq!(settings.root(), canonical(flag_root.path()));

        let settings =
            Settings::discover(None, Some(env_root.path().to_path_buf()), marked.path()).unwrap();
        assert_eq!(settings.root(), canonical(env_root.path()));

        // Empty variable is ignored.
        let settings = Settings::discover(None, Some(PathBuf::new()), marked.path()).unwrap();
        assert_eq!(settings.root(), canonical(marked.path()));
    }

    #[test]
    fn relative_root_is_taken_from_cwd() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("jam")).unwrap();
        let settings = Settings::discover(Some(Path::new("jam")), None, dir.path()).unwrap();
        assert_eq!(settings.root(), canonical(&dir.path().join("jam")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Settings::discover(Some(Path::new("nope")), None, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("root directory not found"));
    }

    #[test]
    fn reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "extension = \"py\"\ntemplates = \"my-templates\"\n",
        )
        .unwrap();

        let settings = Settings::discover(None, None, dir.path()).unwrap();
        assert_eq!(settings.extension(), "py");
        assert_eq!(
            settings.template_source(),
            TemplateSource::Dir(canonical(dir.path()).join("my-templates"))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "language = \"py\"\n").unwrap();
        let err = Settings::discover(None, None, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }
}
