use std::sync::Arc;

use crate::auth::application::use_cases::{
    admin_auth::IAdminAuthUseCase, fetch_admin::IFetchAdminUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub authenticate: Arc<dyn IAdminAuthUseCase + Send + Sync>,
    pub fetch: Arc<dyn IFetchAdminUseCase + Send + Sync>,
}
