
use pawfect_test_utils::prelude::*;

use crate::server::{
    error::{auth::AuthError, Error},
    identity::DatabaseIdentityProvider,
    service::auth::AuthService,
};
