use crate::services::auth::AuthContext;

/// Navigable screens of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Dashboard,
    VisaList,
    AddVisa,
    EditVisa(String),
}

impl Route {
    /// Every screen except sign-in requires a stored credential.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::SignIn)
    }
}

/// Presence-only route guard: protected screens require a token in the
/// auth context. No token validation, expiry check, or refresh happens
/// here; absence simply redirects to sign-in.
pub fn guard(route: Route, auth: &AuthContext) -> Route {
    if route.is_protected() && !auth.is_signed_in() {
        Route::SignIn
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_access_redirects_to_sign_in() {
        let auth = AuthContext::anonymous();
        assert_eq!(guard(Route::Dashboard, &auth), Route::SignIn);
        assert_eq!(guard(Route::VisaList, &auth), Route::SignIn);
        assert_eq!(guard(Route::AddVisa, &auth), Route::SignIn);
        assert_eq!(
            guard(Route::EditVisa("abc".to_string()), &auth),
            Route::SignIn
        );
    }

    #[test]
    fn sign_in_is_always_reachable() {
        assert_eq!(guard(Route::SignIn, &AuthContext::anonymous()), Route::SignIn);
        assert_eq!(
            guard(Route::SignIn, &AuthContext::with_token("t")),
            Route::SignIn
        );
    }

    #[test]
    fn any_token_passes_the_presence_check() {
        let auth = AuthContext::with_token("not-even-a-jwt");
        assert_eq!(guard(Route::VisaList, &auth), Route::VisaList);
        assert_eq!(
            guard(Route::EditVisa("abc".to_string()), &auth),
            Route::EditVisa("abc".to_string())
        );
    }
}
