//! Roles: named roles assigned to user accounts.

use crate::id::RoleId;
use crate::resource::define_resource;

define_resource!(
    /// An account role as returned by the authorization server.
    Role {
        id: RoleId,
        kind: Roles,
        list: RolesRepresentation { roles },
        builder: RoleBuilder,
    }
);
