/// CSS `display` values for elements gated on the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthVisibility {
    /// `.auth-required` elements.
    pub auth_required: &'static str,
    /// `.guest-only` elements.
    pub guest_only: &'static str,
}

impl AuthVisibility {
    pub fn for_status(authenticated: bool) -> AuthVisibility {
        if authenticated {
            return AuthVisibility {
                auth_required: "block",
                guest_only: "none",
            };
        }

        return AuthVisibility {
            auth_required: "none",
            guest_only: "block",
        };
    }
}
