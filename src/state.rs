use std::sync::Arc;

use crate::auth::TokenValidator;
use crate::database::Store;
use crate::middleware::PermissionGuard;

/// Dependencies handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub validator: Arc<TokenValidator>,
    pub rows_per_page: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, validator: Arc<TokenValidator>, rows_per_page: usize) -> Self {
        Self {
            store,
            validator,
            rows_per_page,
        }
    }

    pub fn guard(&self, permission: &'static str) -> PermissionGuard {
        PermissionGuard::new(self.validator.clone(), permission)
    }
}
