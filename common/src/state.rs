use std::{cell::Cell, rc::Rc};

use crate::service::ServiceError;

/// Lifecycle of a page's data: starts `Loading`, settles once, never goes back.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(ServiceError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn settle(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Shared between a pending load and whoever started it. Once expired, the
/// load's result belongs to nobody and is dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard(Rc<Cell<bool>>);

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expire(&self) {
        self.0.set(true);
    }

    pub fn is_current(&self) -> bool {
        !self.0.get()
    }
}
