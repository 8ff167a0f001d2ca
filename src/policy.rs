//! Role-based access decisions.
//!
//! A pure decision table from (role claim, operation) to allow/deny. The
//! role claim is resolved by the fronting authentication layer; this module
//! never sees credentials, cookies or sessions.

/// Resolved caller identity for one operation.
///
/// `Anonymous` is the absence of any claim, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Anonymous,
}

impl Role {
    /// Resolve a raw claim string into a role.
    ///
    /// Unrecognized claims degrade to `Anonymous` rather than erroring, so a
    /// misconfigured auth layer can never grant more than it names.
    #[must_use]
    pub fn from_claim(claim: &str) -> Self {
        match claim.to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Anonymous,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Anonymous => "anonymous",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operations the policy gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LookupWord,
    SubmitRequest,
    ListPending,
    ClearPending,
    ApproveTranslation,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LookupWord => "look up a word",
            Self::SubmitRequest => "submit a translation request",
            Self::ListPending => "list pending requests",
            Self::ClearPending => "clear a pending request",
            Self::ApproveTranslation => "approve a translation",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether `role` may perform `operation`.
///
/// Lookups are open to everyone. Submitting a request needs at least a user
/// claim. Everything that mutates the approved store or the backlog is
/// admin-only.
#[must_use]
pub const fn allow(role: Role, operation: Operation) -> bool {
    match operation {
        Operation::LookupWord => true,
        Operation::SubmitRequest => matches!(role, Role::Admin | Role::User),
        Operation::ListPending | Operation::ClearPending | Operation::ApproveTranslation => {
            matches!(role, Role::Admin)
        }
    }
}
