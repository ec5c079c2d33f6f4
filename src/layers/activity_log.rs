use axum::{Extension, middleware::AddExtension};
use std::sync::Arc;
use tower::Layer;

use crate::{
    config::SupabaseSettings,
    repositories::activity_log::{ActivityLogRepo, SupabaseActivityLogRepo},
};

#[derive(Clone)]
pub struct ActivityLogRepoLayer(pub ActivityLogRepo);

impl ActivityLogRepoLayer {
    pub fn supabase(settings: &SupabaseSettings) -> Self {
        Self(Arc::new(SupabaseActivityLogRepo::new(settings)))
    }
}

impl<S> Layer<S> for ActivityLogRepoLayer {
    type Service = AddExtension<S, ActivityLogRepo>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
