//! Handler for `GET /users/me`.

use actix_web::HttpResponse;

use crate::middleware::CurrentUser;

/// Return the authenticated user's profile. The record was resolved by
/// the bearer middleware on this very request, so no further lookup is
/// needed.
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
