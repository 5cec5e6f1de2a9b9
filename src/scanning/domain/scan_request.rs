use super::GraphNode;

/// Which policy context the scanner applies to a submitted graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Project key; the project's watches apply
    Project(String),
    /// Repository path the artifact is meant to be deployed to
    RepoPath(String),
    /// Explicit list of watch names (never empty)
    Watches(Vec<String>),
}

impl ScanTarget {
    /// Resolves loose caller options into a single target.
    ///
    /// Blank values do not count as supplied. Precedence is project key,
    /// then repository path, then watches; lower-precedence selections that
    /// were also supplied are dropped with a warning.
    pub fn select(
        project: Option<String>,
        repo_path: Option<String>,
        watches: Vec<String>,
    ) -> Option<ScanTarget> {
        let project = project.filter(|p| !p.trim().is_empty());
        let repo_path = repo_path.filter(|p| !p.trim().is_empty());
        let watches: Vec<String> = watches
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .collect();

        let mut candidates = Vec::with_capacity(3);
        if let Some(project) = project {
            candidates.push(ScanTarget::Project(project));
        }
        if let Some(repo_path) = repo_path {
            candidates.push(ScanTarget::RepoPath(repo_path));
        }
        if !watches.is_empty() {
            candidates.push(ScanTarget::Watches(watches));
        }

        let mut candidates = candidates.into_iter();
        let selected = candidates.next()?;
        let ignored: Vec<&'static str> = candidates.map(|c| c.kind()).collect();
        if !ignored.is_empty() {
            tracing::warn!(
                selected = selected.kind(),
                ignored = ?ignored,
                "more than one scan target supplied; using the highest-precedence one"
            );
        }
        Some(selected)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScanTarget::Project(_) => "project",
            ScanTarget::RepoPath(_) => "repo_path",
            ScanTarget::Watches(_) => "watch",
        }
    }

    /// Query string selecting this target, including the leading `?`
    pub fn query_string(&self) -> String {
        match self {
            ScanTarget::Project(key) => format!("?project={}", encode_query_value(key)),
            ScanTarget::RepoPath(path) => format!("?repo_path={}", encode_query_value(path)),
            ScanTarget::Watches(watches) => {
                let joined = watches
                    .iter()
                    .map(|w| encode_query_value(w))
                    .collect::<Vec<_>>()
                    .join("&watch=");
                format!("?watch={}", joined)
            }
        }
    }
}

/// Percent-encodes a query value, leaving `/` readable in repository paths.
pub(crate) fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

/// A graph submission: what to scan and under which policy context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub target: Option<ScanTarget>,
    pub graph: GraphNode,
}

impl ScanRequest {
    pub fn new(graph: GraphNode) -> Self {
        Self {
            target: None,
            graph,
        }
    }

    pub fn with_target(mut self, target: ScanTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Builds a request from loose options using [`ScanTarget::select`].
    pub fn from_options(
        graph: GraphNode,
        project: Option<String>,
        repo_path: Option<String>,
        watches: Vec<String>,
    ) -> Self {
        Self {
            target: ScanTarget::select(project, repo_path, watches),
            graph,
        }
    }
}

/// Optional details requested when fetching scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultInclusion {
    pub vulnerabilities: bool,
    pub licenses: bool,
}

impl ResultInclusion {
    pub fn new(vulnerabilities: bool, licenses: bool) -> Self {
        Self {
            vulnerabilities,
            licenses,
        }
    }

    /// Query string for the results endpoint; empty when nothing is requested
    pub fn query_string(&self) -> &'static str {
        match (self.vulnerabilities, self.licenses) {
            (true, true) => "?include_vulnerabilities=true&include_licenses=true",
            (true, false) => "?include_vulnerabilities=true",
            (false, true) => "?include_licenses=true",
            (false, false) => "",
        }
    }
}
