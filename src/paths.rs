use {
    std::path::{Component, Path},
    tap::Tap,
    tracing::debug,
};

/// Competition, year and round: the only levels that can be inferred.
pub const INFERABLE_LEVELS: usize = 3;

/// Path segments of `cwd` below `root`, at most [`INFERABLE_LEVELS`] of them.
///
/// Empty when `cwd` is `root` itself or lies outside of it. Both paths are
/// compared as given, callers are expected to canonicalize them first.
pub fn infer(root: &Path, cwd: &Path) -> Vec<String> {
    segments(root, cwd)
        .into_iter()
        .take(INFERABLE_LEVELS)
        .collect::<Vec<_>>()
        .tap(|inferred| debug!(?root, ?cwd, ?inferred, "inferred path segments"))
}

/// Number of levels `cwd` sits below `root` (0 when outside).
pub fn depth(root: &Path, cwd: &Path) -> usize {
    segments(root, cwd).len()
}

fn segments(root: &Path, cwd: &Path) -> Vec<String> {
    cwd.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use {super::*, std::path::PathBuf};

    fn root() -> PathBuf {
        PathBuf::from("/jam")
    }

    #[test]
    fn root_itself_infers_nothing() {
        assert!(infer(&root(), &root()).is_empty());
        assert_eq!(depth(&root(), &root()), 0);
    }

    #[test]
    fn outside_root_infers_nothing() {
        let cwd = PathBuf::from("/elsewhere/CompA/2020");
        assert!(infer(&root(), &cwd).is_empty());
        assert_eq!(depth(&root(), &cwd), 0);

        // A sibling sharing the name prefix is not inside the root.
        let cwd = PathBuf::from("/jammed/CompA");
        assert!(infer(&root(), &cwd).is_empty());
    }

    #[test]
    fn segments_follow_hierarchy() {
        let cwd = root().join("CompA");
        assert_eq!(infer(&root(), &cwd), vec!["CompA"]);

        let cwd = root().join("CompA/2020/Round1");
        assert_eq!(infer(&root(), &cwd), vec!["CompA", "2020", "Round1"]);
        assert_eq!(depth(&root(), &cwd), 3);
    }

    #[test]
    fn problem_level_and_deeper_are_capped() {
        let cwd = root().join("CompA/2020/Round1/ProblemX/nested");
        assert_eq!(depth(&root(), &cwd), 5);
        assert_eq!(infer(&root(), &cwd), vec!["CompA", "2020", "Round1"]);
    }
}
