//! GraphQL object types.

use async_graphql::SimpleObject;
use userdir_service::UserResponse;

/// A user as exposed over GraphQL.
///
/// Every field is nullable on the wire even though storage always fills it.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<UserResponse> for UserObject {
    fn from(user: UserResponse) -> Self {
        Self {
            id: Some(user.id.into_inner()),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            email: Some(user.email),
        }
    }
}
