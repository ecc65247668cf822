//! Me service: the authenticated rider's account.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, Page, PageQuery, Pages, PagesBuilder};
use crate::models::{HistoryEntry, PaymentMethodListing, Profile, PromoCode};
use crate::{Error, Result};

/// A page of ride history.
pub type HistoryPage = Page<HistoryEntry>;

/// Service for the rider's profile, promotions, payment methods and history.
pub struct MeService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct ApplyPromoCode<'a> {
    applied_promotion_codes: &'a str,
}

impl MeService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the rider's profile.
    pub async fn profile(&self) -> Result<Profile> {
        self.inner.get("/v1.2/me").await
    }

    /// Apply a promotion code to the rider's account.
    pub async fn apply_promo_code(&self, code: &str) -> Result<PromoCode> {
        let code = code.trim();
        if code.is_empty() {
            return Err(Error::InvalidInput("promo code must not be blank".to_string()));
        }
        let body = ApplyPromoCode {
            applied_promotion_codes: code,
        };
        self.inner.patch("/v1.2/me", &body).await
    }

    /// List the rider's payment methods.
    pub async fn payment_methods(&self) -> Result<PaymentMethodListing> {
        self.inner.get("/v1.2/payment-methods").await
    }

    /// Stream the rider's past trips.
    pub fn history(&self, query: Option<PageQuery>) -> Result<Pages<HistoryEntry>> {
        PagesBuilder::new(self.inner.clone(), "/v1.2/history")
            .page_query(query)
            .build()
    }
}
