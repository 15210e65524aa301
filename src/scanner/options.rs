/// How many more directory levels may still produce report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unlimited,
    Remaining(u32),
}

impl Depth {
    /// Map a user-facing level (-1 = unlimited) to the depth handed to the
    /// root listing. The root's own listing consumes one level, so `0` prints
    /// nothing below the root and `1` prints only its immediate children.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            -1 => Some(Depth::Unlimited),
            n if n >= 0 => Some(Depth::Remaining(
                u32::try_from(n).unwrap_or(u32::MAX).saturating_add(1),
            )),
            _ => None,
        }
    }

    /// Depth for the children of the current listing.
    pub fn descend(self) -> Self {
        match self {
            Depth::Unlimited => Depth::Unlimited,
            Depth::Remaining(n) => Depth::Remaining(n.saturating_sub(1)),
        }
    }

    pub fn allows_print(self) -> bool {
        match self {
            Depth::Unlimited => true,
            Depth::Remaining(n) => n > 0,
        }
    }
}

/// Character written after every report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    #[default]
    Newline,
    Nul,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Newline => "\n",
            LineTerminator::Nul => "\0",
        }
    }
}

/// Settings for one scan. Built once before traversal and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Scale sizes to B..YiB instead of always printing KiB
    pub human_readable: bool,

    /// Append a `Total` line after the root summary
    pub print_total: bool,

    /// Levels below the root that may still be reported
    pub max_depth: Depth,

    /// Report regular files, not only directories
    pub show_files: bool,

    /// Entries must be strictly larger than this many bytes to be reported
    pub threshold: u64,

    pub terminator: LineTerminator,

    /// Do not write traversal diagnostics to the error channel
    pub suppress_errors: bool,
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_human_readable(mut self, enabled: bool) -> Self {
        self.human_readable = enabled;
        self
    }

    pub fn with_total(mut self, enabled: bool) -> Self {
        self.print_total = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_files(mut self, enabled: bool) -> Self {
        self.show_files = enabled;
        self
    }

    pub fn with_threshold(mut self, bytes: u64) -> Self {
        self.threshold = bytes;
        self
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_suppress_errors(mut self, enabled: bool) -> Self {
        self.suppress_errors = enabled;
        self
    }
}
