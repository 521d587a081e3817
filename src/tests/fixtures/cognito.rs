use aws_sdk_cognitoidentityprovider::types::AuthenticationResultType;

/// Canonical authentication result with every token populated.
pub fn make_authentication_result() -> AuthenticationResultType {
    AuthenticationResultType::builder()
        .access_token("access-0001")
        .id_token("id-0001")
        .refresh_token("refresh-0001")
        .token_type("Bearer")
        .expires_in(3600)
        .build()
}
