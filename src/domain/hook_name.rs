use super::NormalizedKey;

macro_rules! git_hooks {
    ($($variant:ident => $name:literal, $key:literal;)+) => {
        /// A git hook name.
        ///
        /// Known hooks are a closed set; anything else is kept as
        /// [`HookName::Other`] with its normalized key so it can still be
        /// looked up in config.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum HookName {
            $($variant,)+
            Other(NormalizedKey),
        }

        impl HookName {
            /// Parse a raw hook name. Hyphens and underscores are interchangeable.
            pub fn parse(raw: &str) -> Self {
                let key = NormalizedKey::new(raw);
                match key.as_str() {
                    $($key => HookName::$variant,)+
                    _ => HookName::Other(key),
                }
            }

            /// Canonical hyphenated name for known hooks, the normalized key otherwise.
            pub fn as_str(&self) -> &str {
                match self {
                    $(HookName::$variant => $name,)+
                    HookName::Other(key) => key.as_str(),
                }
            }
        }
    };
}

git_hooks! {
    ApplypatchMsg => "applypatch-msg", "applypatch_msg";
    PreApplypatch => "pre-applypatch", "pre_applypatch";
    PostApplypatch => "post-applypatch", "post_applypatch";
    PreCommit => "pre-commit", "pre_commit";
    PreMergeCommit => "pre-merge-commit", "pre_merge_commit";
    PrepareCommitMsg => "prepare-commit-msg", "prepare_commit_msg";
    CommitMsg => "commit-msg", "commit_msg";
    PostCommit => "post-commit", "post_commit";
    PreRebase => "pre-rebase", "pre_rebase";
    PostCheckout => "post-checkout", "post_checkout";
    PostMerge => "post-merge", "post_merge";
    PrePush => "pre-push", "pre_push";
    PreReceive => "pre-receive", "pre_receive";
    Update => "update", "update";
    ProcReceive => "proc-receive", "proc_receive";
    PostReceive => "post-receive", "post_receive";
    PostUpdate => "post-update", "post_update";
    ReferenceTransaction => "reference-transaction", "reference_transaction";
    PushToCheckout => "push-to-checkout", "push_to_checkout";
    PreAutoGc => "pre-auto-gc", "pre_auto_gc";
    PostRewrite => "post-rewrite", "post_rewrite";
    SendemailValidate => "sendemail-validate", "sendemail_validate";
    FsmonitorWatchman => "fsmonitor-watchman", "fsmonitor_watchman";
    PostIndexChange => "post-index-change", "post_index_change";
}

/// Hooks git lets the user skip with `--no-verify`.
const NO_VERIFY_HOOKS: [&str; 4] = ["pre-commit", "commit-msg", "pre-rebase", "pre-push"];

impl HookName {
    /// The key this hook is stored under in a config mapping.
    pub fn key(&self) -> NormalizedKey {
        match self {
            HookName::Other(key) => key.clone(),
            known => NormalizedKey::new(known.as_str()),
        }
    }

    /// Whether git accepts `--no-verify` to skip this hook.
    pub fn is_bypassable(&self) -> bool {
        NO_VERIFY_HOOKS.contains(&self.as_str())
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
