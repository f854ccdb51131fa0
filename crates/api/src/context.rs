use campus_auth::Caller;

/// Caller context for a request (authenticated identity).
///
/// This is immutable and must be present for all tenant-scoped routes.
/// Tenant and classroom scope come from the request path, not the token;
/// roles are resolved per request against the directory and the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallerContext {
    caller: Caller,
}

impl CallerContext {
    pub fn new(caller: Caller) -> Self {
        Self { caller }
    }

    pub fn caller(&self) -> Caller {
        self.caller
    }
}
