use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::User,
    helpers::OwnerResolver,
    ports::outgoing::{
        CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserQueryError,
        UserRepository, UserRepositoryError,
    },
};

// ========================= Admin Credentials =========================
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
    pub admin_pass: String,
}

#[cfg(not(tarpaulin_include))]
impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// ====================== Admin Auth Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminAuthError {
    #[error("Invalid admin password")]
    InvalidAdminPass,

    #[error("email and password are required")]
    MissingCredentials,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Admin Auth Outcome =============================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAuthOutcome {
    Registered,
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct AdminAuthResponse {
    pub outcome: AdminAuthOutcome,
    pub user: User,
    pub token: String,
}

// ============================ Admin Auth Use Case =============================
#[async_trait]
pub trait IAdminAuthUseCase: Send + Sync {
    async fn execute(
        &self,
        credentials: AdminCredentials,
    ) -> Result<AdminAuthResponse, AdminAuthError>;
}

/// Registers the admin on first use and authenticates it afterwards.
#[derive(Clone)]
pub struct AdminAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    owner_resolver: OwnerResolver,
    admin_pass: String,
}

impl<Q, R> AdminAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        owner_resolver: OwnerResolver,
        admin_pass: String,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
            owner_resolver,
            admin_pass,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, AdminAuthError> {
        self.token_provider
            .issue_token(user.id, &user.email)
            .map_err(|e| AdminAuthError::TokenGenerationFailed(e.to_string()))
    }

    async fn authenticate(
        &self,
        user: User,
        password: &str,
    ) -> Result<AdminAuthResponse, AdminAuthError> {
        let is_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| {
                tracing::warn!("Stored password hash could not be verified: {}", e);
                AdminAuthError::InvalidCredentials
            })?;

        if !is_valid {
            return Err(AdminAuthError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;

        Ok(AdminAuthResponse {
            outcome: AdminAuthOutcome::Authenticated,
            user,
            token,
        })
    }

    async fn register(
        &self,
        email: String,
        password: &str,
    ) -> Result<AdminAuthResponse, AdminAuthError> {
        // Single tenant: once an owner exists nobody else may register
        let existing_owner = self
            .query
            .find_first()
            .await
            .map_err(map_query_error)?;

        if existing_owner.is_some() {
            tracing::warn!("Refusing to register a second admin account");
            return Err(AdminAuthError::InvalidCredentials);
        }

        let password_hash = self
            .password_hasher
            .hash_password(password)
            .await
            .map_err(|e| AdminAuthError::HashingFailed(e.to_string()))?;

        let id = self
            .owner_resolver
            .configured_id()
            .map(Uuid::from)
            .unwrap_or_else(Uuid::new_v4);

        let user = self
            .repository
            .create_user(CreateUserData {
                id,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration
                UserRepositoryError::UserAlreadyExists => AdminAuthError::InvalidCredentials,
                other => AdminAuthError::RepositoryError(other.to_string()),
            })?;

        let token = self.issue_token(&user)?;

        Ok(AdminAuthResponse {
            outcome: AdminAuthOutcome::Registered,
            user,
            token,
        })
    }
}

#[async_trait]
impl<Q, R> IAdminAuthUseCase for AdminAuthUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        credentials: AdminCredentials,
    ) -> Result<AdminAuthResponse, AdminAuthError> {
        let AdminCredentials {
            email,
            password,
            admin_pass,
        } = credentials;

        if admin_pass != self.admin_pass {
            return Err(AdminAuthError::InvalidAdminPass);
        }
        drop(admin_pass);

        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(AdminAuthError::MissingCredentials);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(AdminAuthError::InvalidEmailFormat);
        }

        match self
            .query
            .find_by_email(&email)
            .await
            .map_err(map_query_error)?
        {
            Some(user) => self.authenticate(user, &password).await,
            None => self.register(email, &password).await,
        }
    }
}

fn map_query_error(e: UserQueryError) -> AdminAuthError {
    AdminAuthError::RepositoryError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;

    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::{HashError, TokenClaims, TokenError};

    mock! {
        pub Query {}

        #[async_trait]
        impl UserQuery for Query {
            async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
            async fn find_first(&self) -> Result<Option<User>, UserQueryError>;
        }
    }

    mock! {
        pub Repo {}

        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
            async fn append_skills(
                &self,
                owner: UserId,
                skills: Vec<String>,
            ) -> Result<Vec<String>, UserRepositoryError>;
        }
    }

    /* --------------------------------------------------
     * Fakes
     * -------------------------------------------------- */

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{}", password))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    struct FixedTokens;

    impl TokenProvider for FixedTokens {
        fn issue_token(&self, user_id: Uuid, _email: &str) -> Result<String, TokenError> {
            Ok(format!("token-for-{}", user_id))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in admin auth tests")
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    const ADMIN_PASS: &str = "open-sesame";

    fn stored_user(email: &str, password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: format!("hashed:{}", password),
            skills: vec![],
            projects: vec![],
            experiences: vec![],
            certifications: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn credentials(email: &str, password: &str, admin_pass: &str) -> AdminCredentials {
        AdminCredentials {
            email: email.to_string(),
            password: password.to_string(),
            admin_pass: admin_pass.to_string(),
        }
    }

    fn use_case(query: MockQuery, repo: MockRepo) -> AdminAuthUseCase<MockQuery, MockRepo> {
        let resolver_query = MockQuery::new();
        AdminAuthUseCase::new(
            query,
            repo,
            Arc::new(PlainHasher),
            Arc::new(FixedTokens),
            OwnerResolver::new(Arc::new(resolver_query), None),
            ADMIN_PASS.to_string(),
        )
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn wrong_admin_pass_is_rejected_before_any_lookup() {
        let query = MockQuery::new();
        let repo = MockRepo::new();

        let result = use_case(query, repo)
            .execute(credentials("a@b.com", "pw", "nope"))
            .await;

        assert!(matches!(result, Err(AdminAuthError::InvalidAdminPass)));
    }

    #[tokio::test]
    async fn empty_email_or_password_is_rejected() {
        let result = use_case(MockQuery::new(), MockRepo::new())
            .execute(credentials("  ", "pw", ADMIN_PASS))
            .await;
        assert!(matches!(result, Err(AdminAuthError::MissingCredentials)));

        let result = use_case(MockQuery::new(), MockRepo::new())
            .execute(credentials("a@b.com", "", ADMIN_PASS))
            .await;
        assert!(matches!(result, Err(AdminAuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let result = use_case(MockQuery::new(), MockRepo::new())
            .execute(credentials("not-an-email", "pw", ADMIN_PASS))
            .await;

        assert!(matches!(result, Err(AdminAuthError::InvalidEmailFormat)));
    }

    #[tokio::test]
    async fn fresh_email_registers_the_owner() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .withf(|email| email == "admin@example.com")
            .times(1)
            .returning(|_| Ok(None));
        query.expect_find_first().times(1).returning(|| Ok(None));

        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .withf(|data| data.email == "admin@example.com" && data.password_hash == "hashed:pw")
            .times(1)
            .returning(|data| {
                let mut user = stored_user(&data.email, "pw");
                user.id = data.id;
                Ok(user)
            });

        let response = use_case(query, repo)
            .execute(credentials(" Admin@Example.com ", "pw", ADMIN_PASS))
            .await
            .unwrap();

        assert_eq!(response.outcome, AdminAuthOutcome::Registered);
        assert_eq!(response.user.email, "admin@example.com");
        assert_eq!(response.token, format!("token-for-{}", response.user.id));
    }

    #[tokio::test]
    async fn known_email_with_correct_password_authenticates() {
        let user = stored_user("admin@example.com", "pw");
        let user_id = user.id;

        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut repo = MockRepo::new();
        repo.expect_create_user().never();

        let response = use_case(query, repo)
            .execute(credentials("admin@example.com", "pw", ADMIN_PASS))
            .await
            .unwrap();

        assert_eq!(response.outcome, AdminAuthOutcome::Authenticated);
        assert_eq!(response.token, format!("token-for-{}", user_id));
    }

    #[tokio::test]
    async fn wrong_password_and_second_account_share_the_generic_error() {
        let user = stored_user("admin@example.com", "pw");
        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let wrong_password = use_case(query, MockRepo::new())
            .execute(credentials("admin@example.com", "bad", ADMIN_PASS))
            .await
            .unwrap_err();

        let owner = stored_user("admin@example.com", "pw");
        let mut query = MockQuery::new();
        query.expect_find_by_email().returning(|_| Ok(None));
        query
            .expect_find_first()
            .returning(move || Ok(Some(owner.clone())));
        let mut repo = MockRepo::new();
        repo.expect_create_user().never();

        let second_account = use_case(query, repo)
            .execute(credentials("intruder@example.com", "pw", ADMIN_PASS))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AdminAuthError::InvalidCredentials));
        assert!(matches!(second_account, AdminAuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), second_account.to_string());
    }

    #[tokio::test]
    async fn losing_a_concurrent_registration_is_the_generic_error() {
        let mut query = MockQuery::new();
        query.expect_find_by_email().returning(|_| Ok(None));
        query.expect_find_first().returning(|| Ok(None));

        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .times(1)
            .returning(|_| Err(UserRepositoryError::UserAlreadyExists));

        let result = use_case(query, repo)
            .execute(credentials("second@example.com", "pw", ADMIN_PASS))
            .await;

        assert!(matches!(result, Err(AdminAuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_as_repository_error() {
        let mut query = MockQuery::new();
        query
            .expect_find_by_email()
            .returning(|_| Err(UserQueryError::DatabaseError("db down".to_string())));

        let result = use_case(query, MockRepo::new())
            .execute(credentials("admin@example.com", "pw", ADMIN_PASS))
            .await;

        assert!(matches!(result, Err(AdminAuthError::RepositoryError(_))));
    }
}
