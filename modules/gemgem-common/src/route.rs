use std::fmt;

/// A request path split into segments. Empty segments (`//`) are dropped;
/// the trailing slash and the query string are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePath {
    segments: Vec<String>,
    trailing_slash: bool,
    query: Option<String>,
}

impl RoutePath {
    pub fn parse(raw: &str) -> Self {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };

        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let trailing_slash = !segments.is_empty() && path.ends_with('/');

        Self {
            segments,
            trailing_slash,
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    /// Build from a path and an optional raw query, as handed over by an HTTP router.
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        let mut route = Self::parse(path);
        route.query = query.filter(|q| !q.is_empty()).map(str::to_string);
        route
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Same segments, regardless of trailing slash and query.
    pub fn same_route(&self, other: &RoutePath) -> bool {
        self.segments == other.segments
    }

    pub fn with_prefix(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment.to_string());
        segments.extend(self.segments.iter().cloned());
        Self {
            segments,
            trailing_slash: self.trailing_slash,
            query: self.query.clone(),
        }
    }

    /// Replace the first segment, or prepend when there is none.
    pub fn with_first(&self, segment: &str) -> Self {
        if self.segments.is_empty() {
            return self.with_prefix(segment);
        }
        let mut next = self.clone();
        next.segments[0] = segment.to_string();
        next
    }

    /// The path component only, without the query string.
    pub fn path(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(segment);
        }
        if self.trailing_slash {
            out.push('/');
        }
        out
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

impl From<&str> for RoutePath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
