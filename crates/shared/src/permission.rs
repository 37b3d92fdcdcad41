//! Permission strings attached to documents and files.

use std::fmt;

/// Who a permission applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Everyone, signed in or not
    Any,
    /// Every signed-in user
    Users,
    /// Visitors without a session
    Guests,
    /// One specific user
    User(String),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => f.write_str("any"),
            Role::Users => f.write_str("users"),
            Role::Guests => f.write_str("guests"),
            Role::User(id) => write!(f, "user:{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Permission {
    Read(Role),
    Update(Role),
    Delete(Role),
    Write(Role),
}

impl Permission {
    pub fn read(role: Role) -> Self {
        Permission::Read(role)
    }

    pub fn update(role: Role) -> Self {
        Permission::Update(role)
    }

    pub fn delete(role: Role) -> Self {
        Permission::Delete(role)
    }

    pub fn write(role: Role) -> Self {
        Permission::Write(role)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, role) = match self {
            Permission::Read(role) => ("read", role),
            Permission::Update(role) => ("update", role),
            Permission::Delete(role) => ("delete", role),
            Permission::Write(role) => ("write", role),
        };
        write!(f, "{}(\"{}\")", action, role)
    }
}
