//! Operating mode configuration.
//!
//! The two mode flags are fixed at startup from the CLI and passed by value
//! into the advisor and composer. They select filtering defaults, warning
//! text, and the advertised tool surface — never a different algorithm.

/// The two independent operating toggles, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatingMode {
    /// Enables delegation and defaults output to changes only.
    pub token_saving: bool,
    /// Includes unchanged (`equal`) segments for full context, at higher
    /// token cost. Wins over token-saving for segment filtering.
    pub accuracy: bool,
}

impl OperatingMode {
    /// Build a mode from the two startup flags.
    #[must_use]
    pub const fn new(token_saving: bool, accuracy: bool) -> Self {
        Self {
            token_saving,
            accuracy,
        }
    }

    /// Whether diff payloads keep `equal` segments.
    #[must_use]
    pub const fn include_equal_segments(&self) -> bool {
        self.accuracy
    }

    /// The `mode` label carried in diff payloads.
    #[must_use]
    pub const fn diff_mode_label(&self) -> &'static str {
        if self.accuracy {
            "accuracy"
        } else {
            "standard"
        }
    }

    /// Server name advertised during MCP initialization.
    #[must_use]
    pub const fn server_name(&self) -> &'static str {
        match (self.token_saving, self.accuracy) {
            (true, true) => "codiff-mcp (token-saving + accuracy mode)",
            (true, false) => "codiff-mcp (token-saving mode)",
            (false, true) => "codiff-mcp (accuracy mode)",
            (false, false) => "codiff-mcp",
        }
    }

    /// Server version advertised during MCP initialization.
    #[must_use]
    pub const fn server_version(&self) -> &'static str {
        match (self.token_saving, self.accuracy) {
            (true, true) => "0.2.6-ts-acc",
            (true, false) => "0.2.6-ts",
            (false, true) => "0.2.6-acc",
            (false, false) => "0.2.7",
        }
    }

    /// Suffix appended to the startup banner.
    #[must_use]
    pub const fn banner_suffix(&self) -> &'static str {
        match (self.token_saving, self.accuracy) {
            (true, true) => " (token-saving + accuracy mode enabled)",
            (true, false) => " (token-saving mode enabled)",
            (false, true) => " (accuracy mode enabled)",
            (false, false) => "",
        }
    }

    /// Human-readable tool description advertised in `tools/list`.
    #[must_use]
    pub const fn tool_description(&self) -> &'static str {
        match (self.token_saving, self.accuracy) {
            (true, true) => {
                "Computes line-based differences with token optimization and full accuracy.\n\
                 \n\
                 • Returns \"identical\" for identical texts\n\
                 • Delegates small/similar texts to LLM for efficiency\n\
                 • Includes unchanged text (\"equal\" parts) for complete context\n\
                 • Warns about token cost implications"
            }
            (true, false) => {
                "Computes line-based differences with token efficiency prioritization.\n\
                 \n\
                 • Returns \"identical\" for identical texts\n\
                 • Delegates small/similar texts to LLM when more efficient\n\
                 • Shows only changes (insertions/deletions) to minimize tokens\n\
                 • Only uses full diffing when it provides significant savings"
            }
            (false, true) => {
                "Computes line-based differences with full accuracy mode.\n\
                 \n\
                 • Includes unchanged text (\"equal\" parts) for complete context\n\
                 • Always performs full diff analysis regardless of token costs\n\
                 • Provides comprehensive change analysis\n\
                 • ⚠️ WARNING: May significantly increase token costs"
            }
            (false, false) => {
                "Computes line-based differences, showing only changes to minimize token usage.\n\
                 \n\
                 • Shows only insertions and deletions (excludes unchanged text)\n\
                 • Returns \"identical\" for identical texts\n\
                 • Warns when diff costs more tokens than original texts\n\
                 • Use --accuracy to include unchanged text"
            }
        }
    }
}
