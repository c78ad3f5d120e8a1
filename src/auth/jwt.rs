use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::types::Claims;
use crate::entities::user;

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            expiration_hours,
        }
    }

    pub fn generate_token(&self, user: &user::Model) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            sub: user.id,
            auth_id: user.auth_id.clone(),
            role: user.role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::entities::enums::{UserRole, UserStatus};

    fn user() -> user::Model {
        let now = Utc::now();
        user::Model {
            id: 12,
            create_time: now,
            update_time: now,
            auth_id: "tech@example.com".into(),
            first_name: None,
            last_name: None,
            email: None,
            status: UserStatus::Active,
            role: UserRole::Admin,
        }
    }

    #[test]
    fn token_round_trips_viewer() {
        let jwt = JwtService::new("test-secret", 1);
        let token = jwt.generate_token(&user()).unwrap();
        let claims = jwt.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 12);
        assert_eq!(claims.auth_id, "tech@example.com");
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtService::new("one", 1).generate_token(&user()).unwrap();
        assert!(JwtService::new("two", 1).verify_token(&token).is_err());
    }
}
