// Permission strings checked by the route guards.

pub const GET_ACTORS: &str = "get:actors";
pub const GET_MOVIES: &str = "get:movies";
pub const POST_ACTOR: &str = "post:actor";
pub const POST_MOVIE: &str = "post:movie";
pub const UPDATE_ACTOR: &str = "update:actor";
pub const UPDATE_MOVIE: &str = "update:movie";
pub const DELETE_ACTOR: &str = "delete:actor";
pub const DELETE_MOVIE: &str = "delete:movie";

pub const ALL: [&str; 8] = [
    GET_ACTORS,
    GET_MOVIES,
    POST_ACTOR,
    POST_MOVIE,
    UPDATE_ACTOR,
    UPDATE_MOVIE,
    DELETE_ACTOR,
    DELETE_MOVIE,
];

/// Roles configured at the identity provider and the permissions each grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    CastingAssistant,
    CastingDirector,
    ExecutiveProducer,
}

impl Role {
    pub fn permissions(self) -> &'static [&'static str] {
        match self {
            Role::CastingAssistant => &[GET_ACTORS, GET_MOVIES],
            Role::CastingDirector => &[
                GET_ACTORS,
                GET_MOVIES,
                POST_ACTOR,
                DELETE_ACTOR,
                UPDATE_ACTOR,
                UPDATE_MOVIE,
            ],
            Role::ExecutiveProducer => &ALL,
        }
    }

    pub fn grants(self, permission: &str) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_nested() {
        for permission in Role::CastingAssistant.permissions() {
            assert!(Role::CastingDirector.grants(permission));
        }
        for permission in Role::CastingDirector.permissions() {
            assert!(Role::ExecutiveProducer.grants(permission));
        }
    }

    #[test]
    fn only_producer_manages_movies() {
        assert!(!Role::CastingDirector.grants(POST_MOVIE));
        assert!(!Role::CastingDirector.grants(DELETE_MOVIE));
        assert!(Role::ExecutiveProducer.grants(POST_MOVIE));
        assert!(Role::ExecutiveProducer.grants(DELETE_MOVIE));
    }
}
