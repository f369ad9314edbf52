//! Authorities: OAuth2 app authorities granted to clients.

use crate::id::AuthorityId;
use crate::resource::define_resource;

define_resource!(
    /// An OAuth2 authority as returned by the authorization server.
    Authority {
        id: AuthorityId,
        kind: Authorities,
        list: AuthoritiesRepresentation { authorities },
        builder: AuthorityBuilder,
    }
);
