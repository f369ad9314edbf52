//! Scopes: the OAuth2 scopes a client may request.

use crate::id::ScopeId;
use crate::resource::define_resource;

define_resource!(
    /// An OAuth2 scope as returned by the authorization server.
    Scope {
        id: ScopeId,
        kind: Scopes,
        list: ScopesRepresentation { scopes },
        builder: ScopeBuilder,
    }
);
