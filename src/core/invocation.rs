//! The parsed command invocation.
//!
//! One [`Invocation`] is constructed per run and passed immutably through the
//! dispatcher and handlers; handlers return final argument lists instead of
//! mutating shared state. The flag/free split drives the pass-through rule:
//! any free (non-flag) argument means the user already knows what they want,
//! so no menu is shown.

/// An immutable view of one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: String,
    /// Residual arguments after the subcommand, in order
    pub args: Vec<String>,
    /// The residual arguments that start with a flag marker
    pub flags: Vec<String>,
    /// The residual arguments that do not
    pub free_args: Vec<String>,
}

impl Invocation {
    /// Parse raw arguments; `None` when there is no subcommand at all
    pub fn parse(args: &[String]) -> Option<Self> {
        let (subcommand, residual) = args.split_first()?;
        let (flags, free_args): (Vec<String>, Vec<String>) = residual
            .iter()
            .cloned()
            .partition(|arg| arg.starts_with('-'));

        Some(Self {
            subcommand: subcommand.clone(),
            args: residual.to_vec(),
            flags,
            free_args,
        })
    }

    /// Whether any of the given flags is present
    pub fn has_any_flag(&self, wanted: &[&str]) -> bool {
        self.flags.iter().any(|flag| wanted.contains(&flag.as_str()))
    }

    /// The invocation forwarded verbatim: subcommand plus residual args
    pub fn forward_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(1 + self.args.len());
        args.push(self.subcommand.clone());
        args.extend(self.args.iter().cloned());
        args
    }

    /// The forwarded invocation with a selection appended
    pub fn with_selection(&self, selection: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut args = self.forward_args();
        args.extend(selection);
        args
    }

    /// The forwarded invocation with a selection inserted directly after the
    /// subcommand, ahead of the residual arguments
    pub fn with_leading_selection(
        &self,
        selection: impl IntoIterator<Item = String>,
    ) -> Vec<String> {
        let mut args = vec![self.subcommand.clone()];
        args.extend(selection);
        args.extend(self.args.iter().cloned());
        args
    }
}
