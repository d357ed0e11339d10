
use pawfect_test_utils::prelude::*;

use crate::server::{
    error::{user::UserError, Error},
    identity::DatabaseIdentityProvider,
    service::user::UserService,
};
