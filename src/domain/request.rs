use super::HookName;

/// A single hook invocation as received from git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRequest {
    /// The hook name exactly as it was passed on the command line.
    pub name: String,
    /// Parsed form of `name`.
    pub hook: HookName,
    /// Full argument tuple: `name` followed by the arguments git supplied.
    pub args: Vec<String>,
}

impl HookRequest {
    pub fn new(name: impl Into<String>, hook_args: Vec<String>) -> Self {
        let name = name.into();
        let mut args = Vec::with_capacity(hook_args.len() + 1);
        args.push(name.clone());
        args.extend(hook_args);
        HookRequest {
            hook: HookName::parse(&name),
            name,
            args,
        }
    }

    /// The hook named by the first element of the argument tuple.
    pub fn first_arg_hook(&self) -> HookName {
        self.args
            .first()
            .map(|a| HookName::parse(a))
            .unwrap_or_else(|| self.hook.clone())
    }
}

/// A request paired with the command configured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub hook: HookRequest,
    pub command: String,
}
